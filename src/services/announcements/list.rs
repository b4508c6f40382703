use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::models::ApiResponse;
use crate::models::announcements::requests::AnnouncementListParams;
use crate::services::storage_error;

pub async fn list_announcements(
    service: &AnnouncementService,
    request: &HttpRequest,
    query: AnnouncementListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_announcements_with_pagination(query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            page,
            "Announcements retrieved successfully",
        ))),
        Err(e) => Ok(storage_error("Failed to list announcements", e)),
    }
}
