use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::StaffService;
use crate::models::ApiResponse;
use crate::models::staff::{requests::CreateStaffRequest, rules::STAFF_RULES};
use crate::services::{Reference, ensure_references, parse_body, storage_error};
use crate::storage::RefTable;
use crate::validation::Mode;

pub async fn create_staff(
    service: &StaffService,
    request: &HttpRequest,
    body: Value,
) -> ActixResult<HttpResponse> {
    let staff: CreateStaffRequest = match parse_body(&STAFF_RULES, body, Mode::Create) {
        Ok(staff) => staff,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    let references = vec![Reference::one(
        "reportingTo",
        RefTable::Staff,
        staff.reporting_to.as_deref(),
    )];
    if let Err(response) = ensure_references(&storage, references).await {
        return Ok(response);
    }

    match storage.create_staff(staff).await {
        Ok(staff) => {
            info!("Staff member {} created: {}", staff.id, staff.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                staff,
                "Staff member created successfully",
            )))
        }
        Err(e) => Ok(storage_error("Failed to create staff member", e)),
    }
}
