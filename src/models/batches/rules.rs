use once_cell::sync::Lazy;

use super::entities::{BatchStatus, Weekday};
use crate::validation::{FieldRule, RuleSet};

pub static BATCH_RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new()
        .field(
            FieldRule::new("name")
                .required("Batch name is required")
                .length(1, 100, "Batch name must be between 1 and 100 characters"),
        )
        .field(
            FieldRule::new("standard")
                .required("Standard is required")
                .id("Standard must be a valid ID"),
        )
        .field(
            FieldRule::new("subject")
                .required("Subject is required")
                .id("Subject must be a valid ID"),
        )
        .field(
            FieldRule::new("teacher")
                .required("Teacher is required")
                .id("Teacher must be a valid ID"),
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
                .date_after("startDate", "End date must be after start date"),
        )
        .field(
            FieldRule::new("schedule.days")
                .required("Schedule days are required")
                .non_empty_list("At least one schedule day is required")
                .members(Weekday::VALUES, "Schedule days must be valid weekday names"),
        )
        .field(
            FieldRule::new("schedule.startTime")
                .required("Start time is required")
                .time("Start time must be in HH:mm format"),
        )
        .field(
            FieldRule::new("schedule.endTime")
                .required("End time is required")
                .time("End time must be in HH:mm format")
                .time_after("schedule.startTime", "End time must be after start time"),
        )
        .field(
            FieldRule::new("capacity")
                .required("Capacity is required")
                .integer(Some(1), None, "Capacity must be at least 1"),
        )
        .field(
            FieldRule::new("fees")
                .required("Fees are required")
                .number(Some(0.0), None, "Fees must be a non-negative number"),
        )
        .field(FieldRule::new("status").one_of(
            BatchStatus::VALUES,
            "Status must be upcoming, active, completed or cancelled",
        ))
        .field(
            FieldRule::new("description")
                .max_length(500, "Description cannot exceed 500 characters"),
        )
});

pub static ENROLL_RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new().field(
        FieldRule::new("studentIds")
            .required("studentIds is required")
            .non_empty_list("Select at least one student")
            .id_list("studentIds must contain valid student IDs"),
    )
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FieldError, Mode};
    use serde_json::json;

    fn valid_batch() -> serde_json::Value {
        json!({
            "name": "Class 10 Physics A",
            "standard": "6f1f8c1e-2a8e-4c55-9a8e-3c2f1f0e7d11",
            "subject": "7a2b9d2f-3b9f-4d66-8b9f-4d3a2a1f8e22",
            "teacher": "8b3cae30-4cae-4e77-9cae-5e4b3b2a9f33",
            "startDate": "2024-01-01",
            "endDate": "2024-06-30",
            "schedule": {
                "days": ["monday", "wednesday"],
                "startTime": "16:00",
                "endTime": "17:30"
            },
            "capacity": 30,
            "fees": 12000
        })
    }

    #[test]
    fn test_valid_batch_passes() {
        assert!(BATCH_RULES.validate(&valid_batch(), Mode::Create).is_ok());
    }

    #[test]
    fn test_end_date_before_start_date() {
        let mut payload = valid_batch();
        payload["startDate"] = json!("2024-01-10");
        payload["endDate"] = json!("2024-01-05");
        let errors = BATCH_RULES.validate(&payload, Mode::Create).unwrap_err();
        assert_eq!(
            errors,
            vec![FieldError::new("endDate", "End date must be after start date")]
        );
    }

    #[test]
    fn test_end_time_not_after_start_time() {
        let mut payload = valid_batch();
        payload["schedule"]["endTime"] = json!("16:00");
        let errors = BATCH_RULES.validate(&payload, Mode::Create).unwrap_err();
        assert_eq!(errors[0].field, "schedule.endTime");
    }

    #[test]
    fn test_empty_days_and_zero_capacity() {
        let mut payload = valid_batch();
        payload["schedule"]["days"] = json!([]);
        payload["capacity"] = json!(0);
        payload["fees"] = json!(-1);
        let errors = BATCH_RULES.validate(&payload, Mode::Create).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["schedule.days", "capacity", "fees"]);
    }

    #[test]
    fn test_enroll_requires_ids() {
        let errors = ENROLL_RULES
            .validate(&json!({"studentIds": []}), Mode::Create)
            .unwrap_err();
        assert_eq!(errors[0].message, "Select at least one student");
        let errors = ENROLL_RULES
            .validate(&json!({"studentIds": ["abc"]}), Mode::Create)
            .unwrap_err();
        assert_eq!(errors[0].field, "studentIds");
    }
}
