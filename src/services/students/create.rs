use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::StudentService;
use crate::models::ApiResponse;
use crate::models::students::{requests::CreateStudentRequest, rules::STUDENT_RULES};
use crate::services::{parse_body, storage_error};
use crate::validation::Mode;

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    body: Value,
) -> ActixResult<HttpResponse> {
    let student: CreateStudentRequest = match parse_body(&STUDENT_RULES, body, Mode::Create) {
        Ok(student) => student,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    match storage.create_student(student).await {
        Ok(student) => {
            info!("Student {} created ({})", student.id, student.student_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                student,
                "Student created successfully",
            )))
        }
        Err(e) => Ok(storage_error("Failed to create student", e)),
    }
}
