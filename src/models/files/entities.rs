use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 上传文件记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct StoredFile {
    pub id: String,
    pub original_name: String,
    /// 上传目录中的文件名
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub stored_name: String,
    pub file_size: i64,
    pub content_type: String,
    pub uploaded_by: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
