use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StandardService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, storage_error};

pub async fn get_standard(
    service: &StandardService,
    request: &HttpRequest,
    standard_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_standard_by_id(&standard_id).await {
        Ok(Some(standard)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            standard,
            "Standard retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::StandardNotFound, "Standard not found")),
        Err(e) => Ok(storage_error("Failed to get standard", e)),
    }
}
