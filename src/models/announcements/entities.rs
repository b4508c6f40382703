use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

crate::string_enum! {
    #[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
    AnnouncementType {
        General => "general",
        Academic => "academic",
        Event => "event",
        Holiday => "holiday",
        Exam => "exam",
        Fee => "fee",
    }
}

crate::string_enum! {
    #[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
    Priority {
        Low => "low",
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
}

// 公告，在 [start_date, end_date] 期间展示
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub announcement_type: AnnouncementType,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
