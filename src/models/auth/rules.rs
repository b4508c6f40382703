use once_cell::sync::Lazy;

use crate::validation::{FieldRule, RuleSet};

pub static LOGIN_RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new()
        .field(
            FieldRule::new("email")
                .required("Email is required")
                .email("Please provide a valid email"),
        )
        .field(FieldRule::new("password").required("Password is required"))
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Mode;
    use serde_json::json;

    #[test]
    fn test_both_credentials_required() {
        let errors = LOGIN_RULES.validate(&json!({}), Mode::Create).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "password"]);
    }

    #[test]
    fn test_malformed_email_rejected() {
        let errors = LOGIN_RULES
            .validate(&json!({"email": "office", "password": "secret"}), Mode::Create)
            .unwrap_err();
        assert_eq!(errors[0].message, "Please provide a valid email");
        assert!(LOGIN_RULES
            .validate(
                &json!({"email": "office@tuition.test", "password": "secret"}),
                Mode::Create
            )
            .is_ok());
    }
}
