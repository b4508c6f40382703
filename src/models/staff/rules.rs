use once_cell::sync::Lazy;

use super::entities::{StaffPermission, StaffStatus};
use crate::validation::{FieldRule, RuleSet};

pub static STAFF_RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new()
        .field(
            FieldRule::new("name")
                .required("Name is required")
                .length(1, 100, "Name must be between 1 and 100 characters"),
        )
        .field(
            FieldRule::new("role")
                .required("Role is required")
                .length(1, 50, "Role must be between 1 and 50 characters"),
        )
        .field(
            FieldRule::new("department")
                .required("Department is required")
                .length(1, 50, "Department must be between 1 and 50 characters"),
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
            FieldRule::new("joiningDate")
                .required("Joining date is required")
                .date("Joining date must be a valid date"),
        )
        .field(FieldRule::new("salary").number(Some(0.0), None, "Salary must be a non-negative number"))
        .field(FieldRule::new("status").one_of(
            StaffStatus::VALUES,
            "Status must be active, inactive or on_leave",
        ))
        .field(
            FieldRule::new("permissions")
                .members(StaffPermission::VALUES, "Permissions contain an unknown value"),
        )
        .field(FieldRule::new("reportingTo").id("Reporting manager must be a valid staff ID"))
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Mode;
    use serde_json::json;

    #[test]
    fn test_unknown_permission() {
        let errors = STAFF_RULES
            .validate(&json!({"permissions": ["manage_students", "fly"]}), Mode::Update)
            .unwrap_err();
        assert_eq!(errors[0].field, "permissions");
    }

    #[test]
    fn test_on_leave_status_accepted() {
        assert!(STAFF_RULES.validate(&json!({"status": "on_leave"}), Mode::Update).is_ok());
    }

    #[test]
    fn test_empty_reporting_to_is_allowed() {
        assert!(STAFF_RULES.validate(&json!({"reportingTo": ""}), Mode::Update).is_ok());
    }
}
