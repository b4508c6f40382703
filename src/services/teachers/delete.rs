use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::errors::TuitionError;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, storage_error};

pub async fn delete_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_teacher(&teacher_id).await {
        Ok(true) => {
            info!("Teacher {} and login account deleted", teacher_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Teacher deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(TuitionError::Reference(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::Conflict,
                "Teacher is still assigned to one or more batches",
            ),
        )),
        Err(e) => Ok(storage_error("Failed to delete teacher", e)),
    }
}
