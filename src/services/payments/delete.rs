use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::PaymentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, storage_error};

pub async fn delete_payment(
    service: &PaymentService,
    request: &HttpRequest,
    payment_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_payment(&payment_id).await {
        Ok(true) => {
            info!("Payment {} deleted", payment_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Payment deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::PaymentNotFound, "Payment not found")),
        Err(e) => Ok(storage_error("Failed to delete payment", e)),
    }
}
