use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::Gender;

crate::string_enum! {
    /// 学生所属考试委员会
    #[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
    Board {
        Cbse => "cbse",
        Icse => "icse",
        State => "state",
        Other => "other",
    }
}

// 学生
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: String,
    /// 学号，面向人的编号，如 `STU-4F2A9C7B`
    pub student_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub parent_email: Option<String>,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub board: Board,
    pub school_name: Option<String>,
    pub previous_percentage: Option<f64>,
    pub joining_date: NaiveDate,
    /// 已报名班次 ID
    pub batches: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
