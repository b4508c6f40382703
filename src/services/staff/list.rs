use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffService;
use crate::models::ApiResponse;
use crate::models::staff::requests::StaffListParams;
use crate::services::storage_error;

pub async fn list_staff(
    service: &StaffService,
    request: &HttpRequest,
    query: StaffListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_staff_with_pagination(query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            page,
            "Staff retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("Failed to list staff", e)),
    }
}
