use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::{error, info};

use super::TeacherService;
use crate::models::teachers::{requests::UpdateTeacherRequest, rules::UPDATE_TEACHER_RULES};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{Reference, ensure_references, not_found, parse_body, storage_error};
use crate::storage::RefTable;
use crate::utils::password::hash_password;
use crate::validation::Mode;

pub async fn update_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: String,
    body: Value,
) -> ActixResult<HttpResponse> {
    let mut update: UpdateTeacherRequest =
        match parse_body(&UPDATE_TEACHER_RULES, body, Mode::Update) {
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

    // 新密码只进入账号表
    let password_hash = match update.password.take().filter(|p| !p.is_empty()) {
        Some(password) => match hash_password(&password) {
            Ok(hash) => Some(hash),
            Err(e) => {
                error!("Failed to hash password: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to update teacher",
                    )),
                );
            }
        },
        None => None,
    };

    match storage
        .update_teacher(&teacher_id, update, password_hash)
        .await
    {
        Ok(Some(teacher)) => {
            info!("Teacher {} updated", teacher.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                teacher,
                "Teacher updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(e) => Ok(storage_error("Failed to update teacher", e)),
    }
}
