use once_cell::sync::Lazy;

use super::entities::{PaymentMethod, PaymentStatus};
use crate::validation::{FieldRule, RuleSet};

pub static PAYMENT_RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new()
        .field(
            FieldRule::new("student")
                .required("Student is required")
                .id("Student must be a valid ID"),
        )
        .field(FieldRule::new("batch").id("Batch must be a valid ID"))
        .field(
            FieldRule::new("amount")
                .required("Amount is required")
                .positive("Amount must be greater than 0"),
        )
        .field(
            FieldRule::new("paymentDate")
                .required("Payment date is required")
                .date("Payment date must be a valid date"),
        )
        .field(
            FieldRule::new("method")
                .required("Payment method is required")
                .one_of(PaymentMethod::VALUES, "Invalid payment method"),
        )
        .field(FieldRule::new("status").one_of(
            PaymentStatus::VALUES,
            "Status must be pending, completed, failed or refunded",
        ))
        .field(
            FieldRule::new("transactionId")
                .max_length(100, "Transaction ID cannot exceed 100 characters"),
        )
        .field(FieldRule::new("remarks").max_length(500, "Remarks cannot exceed 500 characters"))
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Mode;
    use serde_json::json;

    #[test]
    fn test_zero_amount_rejected() {
        let errors = PAYMENT_RULES
            .validate(&json!({"amount": 0}), Mode::Update)
            .unwrap_err();
        assert_eq!(errors[0].message, "Amount must be greater than 0");
    }

    #[test]
    fn test_bank_transfer_method_accepted() {
        assert!(PAYMENT_RULES
            .validate(&json!({"method": "bank_transfer"}), Mode::Update)
            .is_ok());
    }
}
