use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 年级
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/standard.ts")]
pub struct Standard {
    pub id: String,
    pub name: String,
    pub level: i32,
    pub description: Option<String>,
    pub is_active: bool,
    /// 科目 ID 列表
    pub subjects: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
