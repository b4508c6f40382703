use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{BatchService, load_batch};
use crate::models::ApiResponse;
use crate::services::storage_error;

pub async fn list_batch_students(
    service: &BatchService,
    request: &HttpRequest,
    batch_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = load_batch(&storage, &batch_id).await {
        return Ok(response);
    }

    match storage.list_batch_students(&batch_id).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            students,
            "Enrolled students retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("Failed to list enrolled students", e)),
    }
}

/// 尚未报名该班次的学生，供选择报名
pub async fn list_available_students(
    service: &BatchService,
    request: &HttpRequest,
    batch_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = load_batch(&storage, &batch_id).await {
        return Ok(response);
    }

    match storage.list_available_students(&batch_id).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            students,
            "Available students retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("Failed to list available students", e)),
    }
}
