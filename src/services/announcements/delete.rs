use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AnnouncementService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, storage_error};

pub async fn delete_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    announcement_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_announcement(&announcement_id).await {
        Ok(true) => {
            info!("Announcement {} deleted", announcement_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Announcement deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::AnnouncementNotFound,
            "Announcement not found",
        )),
        Err(e) => Ok(storage_error("Failed to delete announcement", e)),
    }
}
