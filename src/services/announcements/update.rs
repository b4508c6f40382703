use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::AnnouncementService;
use crate::models::announcements::{
    requests::UpdateAnnouncementRequest, rules::ANNOUNCEMENT_RULES,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, parse_body, storage_error, validation_failed};
use crate::validation::{FieldError, Mode};

pub async fn update_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    announcement_id: String,
    body: Value,
) -> ActixResult<HttpResponse> {
    let update: UpdateAnnouncementRequest =
        match parse_body(&ANNOUNCEMENT_RULES, body, Mode::Update) {
            Ok(update) => update,
            Err(response) => return Ok(response),
        };

    let storage = service.get_storage(request);

    // 只改一端日期时与库中另一端比较
    if update.start_date.is_some() != update.end_date.is_some() {
        let current = match storage.get_announcement_by_id(&announcement_id).await {
            Ok(Some(announcement)) => announcement,
            Ok(None) => {
                return Ok(not_found(
                    ErrorCode::AnnouncementNotFound,
                    "Announcement not found",
                ));
            }
            Err(e) => return Ok(storage_error("Failed to get announcement", e)),
        };
        let start = update.start_date.unwrap_or(current.start_date);
        let end = update.end_date.unwrap_or(current.end_date);
        if end < start {
            return Ok(validation_failed(vec![FieldError::new(
                "endDate",
                "End date cannot be before start date",
            )]));
        }
    }

    match storage.update_announcement(&announcement_id, update).await {
        Ok(Some(announcement)) => {
            info!("Announcement {} updated", announcement.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                announcement,
                "Announcement updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(
            ErrorCode::AnnouncementNotFound,
            "Announcement not found",
        )),
        Err(e) => Ok(storage_error("Failed to update announcement", e)),
    }
}
