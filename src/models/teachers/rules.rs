use once_cell::sync::Lazy;

use crate::models::{ActiveStatus, Gender};
use crate::validation::{FieldRule, RuleSet};

fn base_rules() -> RuleSet {
    RuleSet::new()
        .field(
            FieldRule::new("name")
                .required("Name is required")
                .length(1, 100, "Name must be between 1 and 100 characters"),
        )
        .field(
            FieldRule::new("email")
                .required("Email is required")
                .email("Please provide a valid email"),
        )
        .field(
            FieldRule::new("phone")
                .required("Phone number is required")
                .phone("Phone number must be 10 digits"),
        )
        .field(
            FieldRule::new("gender")
                .required("Gender is required")
                .one_of(Gender::VALUES, "Gender must be male, female or other"),
        )
        .field(FieldRule::new("address").max_length(500, "Address cannot exceed 500 characters"))
        .field(
            FieldRule::new("qualification")
                .required("Qualification is required")
                .length(1, 200, "Qualification must be between 1 and 200 characters"),
        )
        .field(
            FieldRule::new("experience")
                .integer(Some(0), None, "Experience must be a non-negative integer"),
        )
        .field(
            FieldRule::new("joiningDate")
                .required("Joining date is required")
                .date("Joining date must be a valid date"),
        )
        .field(FieldRule::new("salary").number(Some(0.0), None, "Salary must be a non-negative number"))
        .field(
            FieldRule::new("status")
                .one_of(ActiveStatus::VALUES, "Status must be either active or inactive"),
        )
        .field(FieldRule::new("subjects").id_list("Subjects must be a list of valid subject IDs"))
}

pub static CREATE_TEACHER_RULES: Lazy<RuleSet> = Lazy::new(|| {
    base_rules().field(
        FieldRule::new("password")
            .required("Password is required")
            .length(6, 128, "Password must be at least 6 characters"),
    )
});

/// 更新时密码可选，提供时同样校验长度
pub static UPDATE_TEACHER_RULES: Lazy<RuleSet> = Lazy::new(|| {
    base_rules().field(
        FieldRule::new("password").length(6, 128, "Password must be at least 6 characters"),
    )
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Mode;
    use serde_json::json;

    fn valid_teacher() -> serde_json::Value {
        json!({
            "name": "Meera Iyer",
            "email": "meera@example.com",
            "password": "secret1",
            "phone": "9876543210",
            "gender": "female",
            "qualification": "M.Sc. Physics",
            "joiningDate": "2023-06-01"
        })
    }

    #[test]
    fn test_valid_teacher_passes() {
        assert!(CREATE_TEACHER_RULES.validate(&valid_teacher(), Mode::Create).is_ok());
    }

    #[test]
    fn test_missing_password_on_create() {
        let mut payload = valid_teacher();
        payload.as_object_mut().unwrap().remove("password");
        let errors = CREATE_TEACHER_RULES.validate(&payload, Mode::Create).unwrap_err();
        assert_eq!(errors[0].field, "password");
        assert_eq!(errors[0].message, "Password is required");
    }

    #[test]
    fn test_short_password_on_update() {
        let errors = UPDATE_TEACHER_RULES
            .validate(&json!({"password": "123"}), Mode::Update)
            .unwrap_err();
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn test_phone_must_be_ten_digits() {
        let mut payload = valid_teacher();
        payload["phone"] = json!("12345");
        let errors = CREATE_TEACHER_RULES.validate(&payload, Mode::Create).unwrap_err();
        assert_eq!(errors[0].message, "Phone number must be 10 digits");
    }
}
