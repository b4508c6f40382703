use crate::models::users::entities::User;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 登录响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub token: String,
    /// 有效期（秒）
    pub expires_in: i64,
    pub user: User,
}
