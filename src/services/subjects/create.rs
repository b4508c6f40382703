use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::SubjectService;
use crate::models::ApiResponse;
use crate::models::subjects::{requests::CreateSubjectRequest, rules::SUBJECT_RULES};
use crate::services::{parse_body, storage_error};
use crate::validation::Mode;

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    body: Value,
) -> ActixResult<HttpResponse> {
    let subject: CreateSubjectRequest = match parse_body(&SUBJECT_RULES, body, Mode::Create) {
        Ok(subject) => subject,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    match storage.create_subject(subject).await {
        Ok(subject) => {
            info!("Subject {} created: {}", subject.id, subject.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                subject,
                "Subject created successfully",
            )))
        }
        Err(e) => Ok(storage_error("Failed to create subject", e)),
    }
}
