use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::BatchService;
use crate::models::ApiResponse;
use crate::models::batches::{requests::CreateBatchRequest, rules::BATCH_RULES};
use crate::services::{Reference, ensure_references, parse_body, storage_error};
use crate::storage::RefTable;
use crate::validation::Mode;

pub async fn create_batch(
    service: &BatchService,
    request: &HttpRequest,
    body: Value,
) -> ActixResult<HttpResponse> {
    let batch: CreateBatchRequest = match parse_body(&BATCH_RULES, body, Mode::Create) {
        Ok(batch) => batch,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    let references = vec![
        Reference::one("standard", RefTable::Standards, Some(&batch.standard)),
        Reference::one("subject", RefTable::Subjects, Some(&batch.subject)),
        Reference::one("teacher", RefTable::Teachers, Some(&batch.teacher)),
    ];
    if let Err(response) = ensure_references(&storage, references).await {
        return Ok(response);
    }

    match storage.create_batch(batch).await {
        Ok(batch) => {
            info!("Batch {} created: {}", batch.id, batch.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                batch,
                "Batch created successfully",
            )))
        }
        Err(e) => Ok(storage_error("Failed to create batch", e)),
    }
}
