use once_cell::sync::Lazy;

use crate::validation::{FieldRule, RuleSet};

pub static STANDARD_RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new()
        .field(
            FieldRule::new("name")
                .required("Standard name is required")
                .length(1, 100, "Standard name must be between 1 and 100 characters"),
        )
        .field(
            FieldRule::new("level")
                .required("Level is required")
                .integer(Some(1), Some(12), "Level must be an integer between 1 and 12"),
        )
        .field(
            FieldRule::new("description")
                .max_length(500, "Description cannot exceed 500 characters"),
        )
        .field(FieldRule::new("isActive").boolean("isActive must be a boolean"))
        .field(FieldRule::new("subjects").id_list("Subjects must be a list of valid subject IDs"))
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Mode;
    use serde_json::json;

    #[test]
    fn test_level_out_of_range() {
        let errors = STANDARD_RULES
            .validate(&json!({"name": "Class 13", "level": 13}), Mode::Create)
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "level");
    }

    #[test]
    fn test_invalid_subject_reference() {
        let errors = STANDARD_RULES
            .validate(
                &json!({"name": "Class 10", "level": 10, "subjects": ["maths"]}),
                Mode::Create,
            )
            .unwrap_err();
        assert_eq!(errors[0].field, "subjects");
    }
}
