use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::ApiResponse;
use crate::models::teachers::requests::TeacherListParams;
use crate::services::storage_error;

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
    query: TeacherListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_teachers_with_pagination(query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            page,
            "Teachers retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("Failed to list teachers", e)),
    }
}
