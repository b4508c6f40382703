use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::{info, warn};

use super::{BatchService, load_batch};
use crate::errors::TuitionError;
use crate::models::batches::{requests::EnrollStudentsRequest, rules::ENROLL_RULES};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, parse_body, storage_error};
use crate::validation::Mode;

fn batch_closed() -> HttpResponse {
    HttpResponse::Conflict().json(ApiResponse::error_empty(
        ErrorCode::BatchClosed,
        "Batch is no longer accepting enrollments",
    ))
}

pub async fn enroll_students(
    service: &BatchService,
    request: &HttpRequest,
    batch_id: String,
    body: Value,
) -> ActixResult<HttpResponse> {
    let enroll: EnrollStudentsRequest = match parse_body(&ENROLL_RULES, body, Mode::Create) {
        Ok(enroll) => enroll,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    let batch = match load_batch(&storage, &batch_id).await {
        Ok(batch) => batch,
        Err(response) => return Ok(response),
    };
    if !batch.status.accepts_enrollment() {
        return Ok(batch_closed());
    }

    // 存储层在事务内再次检查状态和容量
    match storage.enroll_students(&batch_id, enroll.student_ids).await {
        Ok(Some(result)) => {
            let enrolled = result.succeeded().count();
            let total = result.results.len();
            if enrolled < total {
                warn!(
                    "Batch {}: {} of {} students enrolled",
                    batch_id, enrolled, total
                );
            } else {
                info!("Batch {}: {} students enrolled", batch_id, enrolled);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                result,
                format!("{enrolled} of {total} students enrolled"),
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::BatchNotFound, "Batch not found")),
        Err(TuitionError::Conflict(_)) => Ok(batch_closed()),
        Err(e) => Ok(storage_error("Failed to enroll students", e)),
    }
}

pub async fn unenroll_student(
    service: &BatchService,
    request: &HttpRequest,
    batch_id: String,
    student_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = load_batch(&storage, &batch_id).await {
        return Ok(response);
    }

    match storage.unenroll_student(&batch_id, &student_id).await {
        Ok(true) => {
            info!("Student {} removed from batch {}", student_id, batch_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Student removed from batch",
            )))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::StudentNotEnrolled,
            "Student is not enrolled in this batch",
        )),
        Err(e) => Ok(storage_error("Failed to remove student from batch", e)),
    }
}
