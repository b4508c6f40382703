use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::StoredFile;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct FileUploadResponse {
    pub id: String,
    /// 原始文件名
    pub file_name: String,
    /// 文件大小(字节)
    pub size: i64,
    pub content_type: String,
    /// 下载地址
    pub url: String,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

impl From<StoredFile> for FileUploadResponse {
    fn from(file: StoredFile) -> Self {
        Self {
            url: format!("/api/files/{}", file.id),
            id: file.id,
            file_name: file.original_name,
            size: file.file_size,
            content_type: file.content_type,
            uploaded_at: file.created_at,
        }
    }
}
