use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::dates::{deserialize_date, deserialize_optional_date};
use crate::models::{ActiveStatus, Gender, PaginationQuery};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub status: Option<ActiveStatus>,
    /// 教授该科目的教师
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateTeacherRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub gender: Gender,
    pub address: Option<String>,
    pub qualification: String,
    #[serde(default)]
    pub experience: i32,
    #[serde(deserialize_with = "deserialize_date")]
    pub joining_date: NaiveDate,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub status: ActiveStatus,
    #[serde(default)]
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub qualification: Option<String>,
    pub experience: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub joining_date: Option<NaiveDate>,
    pub salary: Option<f64>,
    pub status: Option<ActiveStatus>,
    pub subjects: Option<Vec<String>>,
}
