use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ActiveStatus;

// 科目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// 课程时长，如 "6 months"
    pub duration: String,
    pub status: ActiveStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
