use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PaymentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, storage_error};

pub async fn get_payment(
    service: &PaymentService,
    request: &HttpRequest,
    payment_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_payment_by_id(&payment_id).await {
        Ok(Some(payment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            payment,
            "Payment retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::PaymentNotFound, "Payment not found")),
        Err(e) => Ok(storage_error("Failed to get payment", e)),
    }
}
