use once_cell::sync::Lazy;

use super::entities::Board;
use crate::models::Gender;
use crate::validation::{FieldRule, RuleSet};

pub static STUDENT_RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new()
        .field(
            FieldRule::new("name")
                .required("Name is required")
                .length(1, 100, "Name must be between 1 and 100 characters"),
        )
        .field(FieldRule::new("email").email("Please provide a valid email"))
        .field(
            FieldRule::new("phone")
                .required("Phone number is required")
                .phone("Phone number must be 10 digits"),
        )
        .field(
            FieldRule::new("parentName")
                .required("Parent name is required")
                .length(1, 100, "Parent name must be between 1 and 100 characters"),
        )
        .field(
            FieldRule::new("parentPhone")
                .required("Parent phone number is required")
                .phone("Parent phone number must be 10 digits"),
        )
        .field(FieldRule::new("parentEmail").email("Please provide a valid parent email"))
        .field(
            FieldRule::new("gender")
                .required("Gender is required")
                .one_of(Gender::VALUES, "Gender must be male, female or other"),
        )
        .field(
            FieldRule::new("dateOfBirth")
                .required("Date of birth is required")
                .date("Date of birth must be a valid date")
                .not_in_future("Date of birth cannot be in the future"),
        )
        .field(FieldRule::new("address").max_length(500, "Address cannot exceed 500 characters"))
        .field(
            FieldRule::new("board")
                .required("Board is required")
                .one_of(Board::VALUES, "Board must be cbse, icse, state or other"),
        )
        .field(
            FieldRule::new("schoolName")
                .max_length(200, "School name cannot exceed 200 characters"),
        )
        .field(FieldRule::new("previousPercentage").number(
            Some(0.0),
            Some(100.0),
            "Previous percentage must be between 0 and 100",
        ))
        .field(
            FieldRule::new("joiningDate")
                .required("Joining date is required")
                .date("Joining date must be a valid date"),
        )
        .field(
            FieldRule::new("studentId")
                .max_length(20, "Student ID cannot exceed 20 characters"),
        )
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Mode;
    use serde_json::json;

    #[test]
    fn test_future_birth_date_rejected() {
        let tomorrow = (chrono::Utc::now().date_naive() + chrono::Duration::days(1))
            .format("%Y-%m-%d")
            .to_string();
        let errors = STUDENT_RULES
            .validate(&json!({ "dateOfBirth": tomorrow }), Mode::Update)
            .unwrap_err();
        assert_eq!(errors[0].message, "Date of birth cannot be in the future");
    }

    #[test]
    fn test_percentage_bounds() {
        assert!(STUDENT_RULES
            .validate(&json!({"previousPercentage": 100}), Mode::Update)
            .is_ok());
        assert!(STUDENT_RULES
            .validate(&json!({"previousPercentage": 100.5}), Mode::Update)
            .is_err());
    }

    #[test]
    fn test_missing_required_fields_are_all_reported() {
        let errors = STUDENT_RULES
            .validate(&json!({"name": "Ravi"}), Mode::Create)
            .unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "phone",
                "parentName",
                "parentPhone",
                "gender",
                "dateOfBirth",
                "board",
                "joiningDate"
            ]
        );
    }
}
