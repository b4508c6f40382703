use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

crate::string_enum! {
    #[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
    BatchStatus {
        Upcoming => "upcoming",
        Active => "active",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

crate::string_enum! {
    #[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
    Weekday {
        Monday => "monday",
        Tuesday => "tuesday",
        Wednesday => "wednesday",
        Thursday => "thursday",
        Friday => "friday",
        Saturday => "saturday",
        Sunday => "sunday",
    }
}

impl Default for BatchStatus {
    fn default() -> Self {
        BatchStatus::Upcoming
    }
}

impl BatchStatus {
    /// 已结束或已取消的班次不再接受报名
    pub fn accepts_enrollment(&self) -> bool {
        matches!(self, BatchStatus::Upcoming | BatchStatus::Active)
    }
}

// 上课安排
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct Schedule {
    pub days: Vec<Weekday>,
    /// `HH:mm`
    pub start_time: String,
    /// `HH:mm`
    pub end_time: String,
}

// 班次
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct Batch {
    pub id: String,
    pub name: String,
    /// 年级 ID
    pub standard: String,
    /// 科目 ID
    pub subject: String,
    /// 教师 ID
    pub teacher: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub schedule: Schedule,
    pub capacity: i32,
    pub fees: f64,
    pub status: BatchStatus,
    pub description: Option<String>,
    /// 已报名学生 ID
    pub enrolled_students: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_batches_reject_enrollment() {
        assert!(BatchStatus::Upcoming.accepts_enrollment());
        assert!(BatchStatus::Active.accepts_enrollment());
        assert!(!BatchStatus::Completed.accepts_enrollment());
        assert!(!BatchStatus::Cancelled.accepts_enrollment());
    }

    #[test]
    fn test_schedule_wire_format() {
        let schedule: Schedule = serde_json::from_str(
            r#"{"days":["monday","friday"],"startTime":"09:00","endTime":"10:30"}"#,
        )
        .unwrap();
        assert_eq!(schedule.days, vec![Weekday::Monday, Weekday::Friday]);
        assert_eq!(schedule.end_time, "10:30");
    }
}
