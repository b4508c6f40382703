use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::SubjectService;
use crate::models::subjects::{requests::UpdateSubjectRequest, rules::SUBJECT_RULES};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, parse_body, storage_error};
use crate::validation::Mode;

pub async fn update_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: String,
    body: Value,
) -> ActixResult<HttpResponse> {
    let update: UpdateSubjectRequest = match parse_body(&SUBJECT_RULES, body, Mode::Update) {
        Ok(update) => update,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    match storage.update_subject(&subject_id, update).await {
        Ok(Some(subject)) => {
            info!("Subject {} updated", subject.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                subject,
                "Subject updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => Ok(storage_error("Failed to update subject", e)),
    }
}
