use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::StaffService;
use crate::models::staff::{requests::UpdateStaffRequest, rules::STAFF_RULES};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{
    Reference, ensure_references, not_found, parse_body, storage_error, validation_failed,
};
use crate::storage::RefTable;
use crate::validation::{FieldError, Mode};

pub async fn update_staff(
    service: &StaffService,
    request: &HttpRequest,
    staff_id: String,
    body: Value,
) -> ActixResult<HttpResponse> {
    let update: UpdateStaffRequest = match parse_body(&STAFF_RULES, body, Mode::Update) {
        Ok(update) => update,
        Err(response) => return Ok(response),
    };

    // 不能把自己设为上级
    if update.reporting_to.as_deref() == Some(staff_id.as_str()) {
        return Ok(validation_failed(vec![FieldError::new(
            "reportingTo",
            "A staff member cannot report to themselves",
        )]));
    }

    let storage = service.get_storage(request);

    let references = vec![Reference::one(
        "reportingTo",
        RefTable::Staff,
        update.reporting_to.as_deref(),
    )];
    if let Err(response) = ensure_references(&storage, references).await {
        return Ok(response);
    }

    match storage.update_staff(&staff_id, update).await {
        Ok(Some(staff)) => {
            info!("Staff member {} updated", staff.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                staff,
                "Staff member updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::StaffNotFound, "Staff member not found")),
        Err(e) => Ok(storage_error("Failed to update staff member", e)),
    }
}
