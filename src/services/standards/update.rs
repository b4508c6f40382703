use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::StandardService;
use crate::models::standards::{requests::UpdateStandardRequest, rules::STANDARD_RULES};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{Reference, ensure_references, not_found, parse_body, storage_error};
use crate::storage::RefTable;
use crate::validation::Mode;

pub async fn update_standard(
    service: &StandardService,
    request: &HttpRequest,
    standard_id: String,
    body: Value,
) -> ActixResult<HttpResponse> {
    let update: UpdateStandardRequest = match parse_body(&STANDARD_RULES, body, Mode::Update) {
        Ok(update) => update,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    let references = vec![Reference::many(
        "subjects",
        RefTable::Subjects,
        update.subjects.as_deref(),
    )];
    if let Err(response) = ensure_references(&storage, references).await {
        return Ok(response);
    }

    match storage.update_standard(&standard_id, update).await {
        Ok(Some(standard)) => {
            info!("Standard {} updated", standard.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                standard,
                "Standard updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::StandardNotFound, "Standard not found")),
        Err(e) => Ok(storage_error("Failed to update standard", e)),
    }
}
