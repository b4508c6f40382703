use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::Board;
use crate::models::common::dates::{deserialize_date, deserialize_optional_date};
use crate::models::{Gender, PaginationQuery};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    /// 匹配姓名、邮箱或学号
    pub search: Option<String>,
    /// 报名了该班次的学生
    pub batch: Option<String>,
    pub board: Option<Board>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub parent_email: Option<String>,
    pub gender: Gender,
    #[serde(deserialize_with = "deserialize_date")]
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub board: Board,
    pub school_name: Option<String>,
    pub previous_percentage: Option<f64>,
    #[serde(deserialize_with = "deserialize_date")]
    pub joining_date: NaiveDate,
    /// 为空时自动生成
    pub student_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
    pub parent_email: Option<String>,
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub board: Option<Board>,
    pub school_name: Option<String>,
    pub previous_percentage: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub joining_date: Option<NaiveDate>,
    pub student_id: Option<String>,
}
