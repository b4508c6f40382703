use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::StandardService;
use crate::models::ApiResponse;
use crate::models::standards::{requests::CreateStandardRequest, rules::STANDARD_RULES};
use crate::services::{Reference, ensure_references, parse_body, storage_error};
use crate::storage::RefTable;
use crate::validation::Mode;

pub async fn create_standard(
    service: &StandardService,
    request: &HttpRequest,
    body: Value,
) -> ActixResult<HttpResponse> {
    let standard: CreateStandardRequest = match parse_body(&STANDARD_RULES, body, Mode::Create) {
        Ok(standard) => standard,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    let references = vec![Reference::many(
        "subjects",
        RefTable::Subjects,
        Some(&standard.subjects),
    )];
    if let Err(response) = ensure_references(&storage, references).await {
        return Ok(response);
    }

    match storage.create_standard(standard).await {
        Ok(standard) => {
            info!("Standard {} created: {}", standard.id, standard.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                standard,
                "Standard created successfully",
            )))
        }
        Err(e) => Ok(storage_error("Failed to create standard", e)),
    }
}
