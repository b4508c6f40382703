use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StandardService;
use crate::errors::TuitionError;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, storage_error};

pub async fn delete_standard(
    service: &StandardService,
    request: &HttpRequest,
    standard_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_standard(&standard_id).await {
        Ok(true) => {
            info!("Standard {} deleted", standard_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Standard deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::StandardNotFound, "Standard not found")),
        // 仍有班次引用该年级
        Err(TuitionError::Reference(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::Conflict,
                "Standard is still used by one or more batches",
            ),
        )),
        Err(e) => Ok(storage_error("Failed to delete standard", e)),
    }
}
