use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{ActiveStatus, Gender};

// 教师档案，登录账号通过 user_id 关联
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: Gender,
    pub address: Option<String>,
    pub qualification: String,
    /// 教学年限
    pub experience: i32,
    pub joining_date: NaiveDate,
    pub salary: f64,
    pub status: ActiveStatus,
    pub subjects: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
