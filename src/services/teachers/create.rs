use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::{error, info};

use super::TeacherService;
use crate::models::teachers::{requests::CreateTeacherRequest, rules::CREATE_TEACHER_RULES};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{Reference, ensure_references, parse_body, storage_error};
use crate::storage::RefTable;
use crate::utils::password::hash_password;
use crate::validation::Mode;

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    body: Value,
) -> ActixResult<HttpResponse> {
    let teacher: CreateTeacherRequest =
        match parse_body(&CREATE_TEACHER_RULES, body, Mode::Create) {
            Ok(teacher) => teacher,
            Err(response) => return Ok(response),
        };

    let storage = service.get_storage(request);

    let references = vec![Reference::many(
        "subjects",
        RefTable::Subjects,
        Some(&teacher.subjects),
    )];
    if let Err(response) = ensure_references(&storage, references).await {
        return Ok(response);
    }

    // 教师邮箱同时是登录账号
    match storage.get_user_by_email(&teacher.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "Email is already registered",
            )));
        }
        Ok(None) => {}
        Err(e) => return Ok(storage_error("Failed to check email", e)),
    }

    let password_hash = match hash_password(&teacher.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash password: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create teacher",
                )),
            );
        }
    };

    match storage.create_teacher(teacher, password_hash).await {
        Ok(teacher) => {
            info!(
                "Teacher {} created with account {}",
                teacher.id, teacher.user_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                teacher,
                "Teacher created successfully",
            )))
        }
        Err(e) => Ok(storage_error("Failed to create teacher", e)),
    }
}
