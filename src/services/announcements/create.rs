use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::AnnouncementService;
use crate::models::ApiResponse;
use crate::models::announcements::{
    requests::CreateAnnouncementRequest, rules::ANNOUNCEMENT_RULES,
};
use crate::services::{parse_body, storage_error};
use crate::validation::Mode;

pub async fn create_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    body: Value,
) -> ActixResult<HttpResponse> {
    let announcement: CreateAnnouncementRequest =
        match parse_body(&ANNOUNCEMENT_RULES, body, Mode::Create) {
            Ok(announcement) => announcement,
            Err(response) => return Ok(response),
        };

    let storage = service.get_storage(request);

    match storage.create_announcement(announcement).await {
        Ok(announcement) => {
            info!("Announcement {} published", announcement.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                announcement,
                "Announcement created successfully",
            )))
        }
        Err(e) => Ok(storage_error("Failed to create announcement", e)),
    }
}
