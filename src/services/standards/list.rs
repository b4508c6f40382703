use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StandardService;
use crate::models::ApiResponse;
use crate::models::standards::requests::StandardListParams;
use crate::services::storage_error;

pub async fn list_standards(
    service: &StandardService,
    request: &HttpRequest,
    query: StandardListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_standards_with_pagination(query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            page,
            "Standards retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("Failed to list standards", e)),
    }
}
