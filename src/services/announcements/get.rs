use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, storage_error};

pub async fn get_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    announcement_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_announcement_by_id(&announcement_id).await {
        Ok(Some(announcement)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            announcement,
            "Announcement retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(
            ErrorCode::AnnouncementNotFound,
            "Announcement not found",
        )),
        Err(e) => Ok(storage_error("Failed to get announcement", e)),
    }
}
