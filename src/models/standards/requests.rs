use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;
use crate::models::common::pagination::deserialize_optional_bool;

// 年级列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/standard.ts")]
pub struct StandardListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/standard.ts")]
pub struct CreateStandardRequest {
    pub name: String,
    pub level: i32,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/standard.ts")]
pub struct UpdateStandardRequest {
    pub name: Option<String>,
    pub level: Option<i32>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub subjects: Option<Vec<String>>,
}

fn default_true() -> bool {
    true
}
