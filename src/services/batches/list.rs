use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::BatchService;
use crate::models::ApiResponse;
use crate::models::batches::requests::BatchListParams;
use crate::services::storage_error;

pub async fn list_batches(
    service: &BatchService,
    request: &HttpRequest,
    query: BatchListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_batches_with_pagination(query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            page,
            "Batches retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("Failed to list batches", e)),
    }
}
