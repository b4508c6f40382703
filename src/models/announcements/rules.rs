use once_cell::sync::Lazy;

use super::entities::{AnnouncementType, Priority};
use crate::validation::{FieldRule, RuleSet};

pub static ANNOUNCEMENT_RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new()
        .field(
            FieldRule::new("title")
                .required("Title is required")
                .length(1, 200, "Title must be between 1 and 200 characters"),
        )
        .field(
            FieldRule::new("content")
                .required("Content is required")
                .length(1, 5000, "Content must be between 1 and 5000 characters"),
        )
        .field(
            FieldRule::new("type")
                .required("Type is required")
                .one_of(AnnouncementType::VALUES, "Invalid announcement type"),
        )
        .field(
            FieldRule::new("priority")
                .required("Priority is required")
                .one_of(Priority::VALUES, "Priority must be low, medium, high or urgent"),
        )
        .field(
            FieldRule::new("startDate")
                .required("Start date is required")
                .date("Start date must be a valid date"),
        )
        .field(
            FieldRule::new("endDate")
                .required("End date is required")
                .date("End date must be a valid date")
                .date_not_before("startDate", "End date cannot be before start date"),
        )
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Mode;
    use serde_json::json;

    #[test]
    fn test_single_day_announcement_allowed() {
        let payload = json!({
            "title": "Holiday",
            "content": "Closed for Diwali",
            "type": "holiday",
            "priority": "high",
            "startDate": "2024-11-01",
            "endDate": "2024-11-01"
        });
        assert!(ANNOUNCEMENT_RULES.validate(&payload, Mode::Create).is_ok());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let errors = ANNOUNCEMENT_RULES
            .validate(&json!({"type": "party"}), Mode::Update)
            .unwrap_err();
        assert_eq!(errors[0].field, "type");
    }
}
