use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

crate::string_enum! {
    #[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
    PaymentMethod {
        Cash => "cash",
        Card => "card",
        Upi => "upi",
        BankTransfer => "bank_transfer",
        Cheque => "cheque",
        Online => "online",
    }
}

crate::string_enum! {
    #[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
    PaymentStatus {
        Pending => "pending",
        Completed => "completed",
        Failed => "failed",
        Refunded => "refunded",
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Completed
    }
}

// 缴费记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct Payment {
    pub id: String,
    /// 学生 ID
    pub student: String,
    /// 班次 ID
    pub batch: Option<String>,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub remarks: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
