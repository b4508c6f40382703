use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::{StaffPermission, StaffStatus};
use crate::models::PaginationQuery;
use crate::models::common::dates::{deserialize_date, deserialize_optional_date};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct StaffListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub department: Option<String>,
    pub status: Option<StaffStatus>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct CreateStaffRequest {
    pub name: String,
    pub role: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub joining_date: NaiveDate,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub status: StaffStatus,
    #[serde(default)]
    pub permissions: Vec<StaffPermission>,
    pub reporting_to: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct UpdateStaffRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub joining_date: Option<NaiveDate>,
    pub salary: Option<f64>,
    pub status: Option<StaffStatus>,
    pub permissions: Option<Vec<StaffPermission>>,
    /// 空字符串表示清除上级
    pub reporting_to: Option<String>,
}
