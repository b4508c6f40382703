use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StaffService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, storage_error};

pub async fn delete_staff(
    service: &StaffService,
    request: &HttpRequest,
    staff_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_staff(&staff_id).await {
        Ok(true) => {
            info!("Staff member {} deleted", staff_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Staff member deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::StaffNotFound, "Staff member not found")),
        Err(e) => Ok(storage_error("Failed to delete staff member", e)),
    }
}
