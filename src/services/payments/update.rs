use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::PaymentService;
use crate::models::payments::{requests::UpdatePaymentRequest, rules::PAYMENT_RULES};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{Reference, ensure_references, not_found, parse_body, storage_error};
use crate::storage::RefTable;
use crate::validation::Mode;

pub async fn update_payment(
    service: &PaymentService,
    request: &HttpRequest,
    payment_id: String,
    body: Value,
) -> ActixResult<HttpResponse> {
    let update: UpdatePaymentRequest = match parse_body(&PAYMENT_RULES, body, Mode::Update) {
        Ok(update) => update,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    // batch 为空字符串时表示解除关联，不做检查
    let references = vec![
        Reference::one("student", RefTable::Students, update.student.as_deref()),
        Reference::one("batch", RefTable::Batches, update.batch.as_deref()),
    ];
    if let Err(response) = ensure_references(&storage, references).await {
        return Ok(response);
    }

    match storage.update_payment(&payment_id, update).await {
        Ok(Some(payment)) => {
            info!("Payment {} updated", payment.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                payment,
                "Payment updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::PaymentNotFound, "Payment not found")),
        Err(e) => Ok(storage_error("Failed to update payment", e)),
    }
}
