use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::ApiResponse;
use crate::models::subjects::requests::SubjectListParams;
use crate::services::storage_error;

pub async fn list_subjects(
    service: &SubjectService,
    request: &HttpRequest,
    query: SubjectListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_subjects_with_pagination(query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            page,
            "Subjects retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("Failed to list subjects", e)),
    }
}
