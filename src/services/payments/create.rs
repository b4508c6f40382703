use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::PaymentService;
use crate::models::ApiResponse;
use crate::models::payments::{requests::CreatePaymentRequest, rules::PAYMENT_RULES};
use crate::services::{Reference, ensure_references, parse_body, storage_error};
use crate::storage::RefTable;
use crate::validation::Mode;

pub async fn create_payment(
    service: &PaymentService,
    request: &HttpRequest,
    body: Value,
) -> ActixResult<HttpResponse> {
    let payment: CreatePaymentRequest = match parse_body(&PAYMENT_RULES, body, Mode::Create) {
        Ok(payment) => payment,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    let references = vec![
        Reference::one("student", RefTable::Students, Some(&payment.student)),
        Reference::one("batch", RefTable::Batches, payment.batch.as_deref()),
    ];
    if let Err(response) = ensure_references(&storage, references).await {
        return Ok(response);
    }

    match storage.create_payment(payment).await {
        Ok(payment) => {
            info!(
                "Payment {} recorded for student {}: {}",
                payment.id, payment.student, payment.amount
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                payment,
                "Payment recorded successfully",
            )))
        }
        Err(e) => Ok(storage_error("Failed to record payment", e)),
    }
}
