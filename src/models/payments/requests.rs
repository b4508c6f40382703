use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::{PaymentMethod, PaymentStatus};
use crate::models::PaginationQuery;
use crate::models::common::dates::{deserialize_date, deserialize_optional_date};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct PaymentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub student: Option<String>,
    pub batch: Option<String>,
    pub status: Option<PaymentStatus>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct CreatePaymentRequest {
    pub student: String,
    pub batch: Option<String>,
    pub amount: f64,
    #[serde(deserialize_with = "deserialize_date")]
    pub payment_date: NaiveDate,
    pub method: PaymentMethod,
    #[serde(default)]
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct UpdatePaymentRequest {
    pub student: Option<String>,
    /// 空字符串表示解除与班次的关联
    pub batch: Option<String>,
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub payment_date: Option<NaiveDate>,
    pub method: Option<PaymentMethod>,
    pub status: Option<PaymentStatus>,
    pub transaction_id: Option<String>,
    pub remarks: Option<String>,
}
