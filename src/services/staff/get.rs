use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, storage_error};

pub async fn get_staff(
    service: &StaffService,
    request: &HttpRequest,
    staff_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_staff_by_id(&staff_id).await {
        Ok(Some(staff)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            staff,
            "Staff member retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::StaffNotFound, "Staff member not found")),
        Err(e) => Ok(storage_error("Failed to get staff member", e)),
    }
}
