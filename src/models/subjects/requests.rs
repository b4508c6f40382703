use serde::Deserialize;
use ts_rs::TS;

use crate::models::{ActiveStatus, PaginationQuery};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub status: Option<ActiveStatus>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CreateSubjectRequest {
    pub name: String,
    pub description: Option<String>,
    pub duration: String,
    #[serde(default)]
    pub status: ActiveStatus,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub status: Option<ActiveStatus>,
}
