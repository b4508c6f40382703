use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::{BatchStatus, Schedule, Weekday};
use crate::models::PaginationQuery;
use crate::models::common::dates::{deserialize_date, deserialize_optional_date};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct BatchListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub standard: Option<String>,
    pub subject: Option<String>,
    pub teacher: Option<String>,
    pub status: Option<BatchStatus>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct CreateBatchRequest {
    pub name: String,
    pub standard: String,
    pub subject: String,
    pub teacher: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub end_date: NaiveDate,
    pub schedule: Schedule,
    pub capacity: i32,
    pub fees: f64,
    #[serde(default)]
    pub status: BatchStatus,
    pub description: Option<String>,
}

// 更新时上课安排可部分提供
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct ScheduleUpdate {
    pub days: Option<Vec<Weekday>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct UpdateBatchRequest {
    pub name: Option<String>,
    pub standard: Option<String>,
    pub subject: Option<String>,
    pub teacher: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<NaiveDate>,
    pub schedule: Option<ScheduleUpdate>,
    pub capacity: Option<i32>,
    pub fees: Option<f64>,
    pub status: Option<BatchStatus>,
    pub description: Option<String>,
}

impl ScheduleUpdate {
    /// 合并到现有安排
    pub fn apply_to(self, current: &Schedule) -> Schedule {
        Schedule {
            days: self.days.unwrap_or_else(|| current.days.clone()),
            start_time: self
                .start_time
                .unwrap_or_else(|| current.start_time.clone()),
            end_time: self.end_time.unwrap_or_else(|| current.end_time.clone()),
        }
    }
}

// 批量报名请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct EnrollStudentsRequest {
    pub student_ids: Vec<String>,
}
