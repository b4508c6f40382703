use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

crate::string_enum! {
    #[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
    StaffStatus {
        Active => "active",
        Inactive => "inactive",
        OnLeave => "on_leave",
    }
}

crate::string_enum! {
    /// 职员可授予的权限
    #[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
    StaffPermission {
        ManageStudents => "manage_students",
        ManageTeachers => "manage_teachers",
        ManageStaff => "manage_staff",
        ManageBatches => "manage_batches",
        ManagePayments => "manage_payments",
        ManageAnnouncements => "manage_announcements",
        ViewReports => "view_reports",
    }
}

impl Default for StaffStatus {
    fn default() -> Self {
        StaffStatus::Active
    }
}

// 职员
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub joining_date: NaiveDate,
    pub salary: f64,
    pub status: StaffStatus,
    pub permissions: Vec<StaffPermission>,
    /// 上级职员 ID
    pub reporting_to: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
