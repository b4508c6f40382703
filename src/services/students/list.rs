use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::ApiResponse;
use crate::models::students::requests::StudentListParams;
use crate::services::storage_error;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    query: StudentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students_with_pagination(query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            page,
            "Students retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("Failed to list students", e)),
    }
}
