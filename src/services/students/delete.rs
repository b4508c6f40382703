use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::errors::TuitionError;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, storage_error};

pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_student(&student_id).await {
        Ok(true) => {
            info!("Student {} deleted", student_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Student deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        // 缴费记录不随学生删除
        Err(TuitionError::Reference(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::Conflict,
                "Student has payment records and cannot be deleted",
            ),
        )),
        Err(e) => Ok(storage_error("Failed to delete student", e)),
    }
}
