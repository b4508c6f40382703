use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::SubjectService;
use crate::errors::TuitionError;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, storage_error};

pub async fn delete_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_subject(&subject_id).await {
        Ok(true) => {
            info!("Subject {} deleted", subject_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Subject deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(TuitionError::Reference(detail)) => {
            warn!("Subject {} is still used by batches: {}", subject_id, detail);
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SubjectInUse,
                "Subject is still used by one or more batches",
            )))
        }
        Err(e) => Ok(storage_error("Failed to delete subject", e)),
    }
}
