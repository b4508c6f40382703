use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PaymentService;
use crate::models::ApiResponse;
use crate::models::payments::requests::PaymentListParams;
use crate::services::storage_error;

pub async fn list_payments(
    service: &PaymentService,
    request: &HttpRequest,
    query: PaymentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_payments_with_pagination(query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            page,
            "Payments retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("Failed to list payments", e)),
    }
}
