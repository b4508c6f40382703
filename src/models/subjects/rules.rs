use once_cell::sync::Lazy;

use crate::models::ActiveStatus;
use crate::validation::{FieldRule, RuleSet};

pub static SUBJECT_RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new()
        .field(
            FieldRule::new("name")
                .required("Subject name is required")
                .length(1, 100, "Subject name must be between 1 and 100 characters"),
        )
        .field(
            FieldRule::new("description")
                .max_length(500, "Description cannot exceed 500 characters"),
        )
        .field(
            FieldRule::new("duration")
                .required("Duration is required")
                .length(1, 50, "Duration must be between 1 and 50 characters"),
        )
        .field(
            FieldRule::new("status")
                .one_of(ActiveStatus::VALUES, "Status must be either active or inactive"),
        )
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Mode;
    use serde_json::json;

    #[test]
    fn test_name_and_duration_required_on_create() {
        let errors = SUBJECT_RULES
            .validate(&json!({"description": "Algebra and geometry"}), Mode::Create)
            .unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "duration"]);
        assert_eq!(errors[1].message, "Duration is required");
    }

    #[test]
    fn test_status_must_be_known() {
        assert!(SUBJECT_RULES
            .validate(&json!({"status": "inactive"}), Mode::Update)
            .is_ok());
        let errors = SUBJECT_RULES
            .validate(&json!({"status": "archived"}), Mode::Update)
            .unwrap_err();
        assert_eq!(errors[0].field, "status");
    }

    #[test]
    fn test_duration_length_limit() {
        let long = "x".repeat(51);
        let errors = SUBJECT_RULES
            .validate(&json!({"name": "Maths", "duration": long}), Mode::Create)
            .unwrap_err();
        assert_eq!(
            errors[0].message,
            "Duration must be between 1 and 50 characters"
        );
    }
}
