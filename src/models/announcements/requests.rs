use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::{AnnouncementType, Priority};
use crate::models::PaginationQuery;
use crate::models::common::dates::{deserialize_date, deserialize_optional_date};

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AnnouncementListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(rename = "type")]
    pub announcement_type: Option<AnnouncementType>,
    pub priority: Option<Priority>,
    /// 仅返回在该日期处于展示期的公告
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub active_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub announcement_type: AnnouncementType,
    pub priority: Priority,
    #[serde(deserialize_with = "deserialize_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct UpdateAnnouncementRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub announcement_type: Option<AnnouncementType>,
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<NaiveDate>,
}
