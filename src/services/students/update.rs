use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::StudentService;
use crate::models::students::{requests::UpdateStudentRequest, rules::STUDENT_RULES};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, parse_body, storage_error};
use crate::validation::Mode;

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: String,
    body: Value,
) -> ActixResult<HttpResponse> {
    let update: UpdateStudentRequest = match parse_body(&STUDENT_RULES, body, Mode::Update) {
        Ok(update) => update,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    match storage.update_student(&student_id, update).await {
        Ok(Some(student)) => {
            info!("Student {} updated", student.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                student,
                "Student updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Ok(storage_error("Failed to update student", e)),
    }
}
