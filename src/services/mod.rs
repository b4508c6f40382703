pub mod announcements;
pub mod auth;
pub mod batches;
pub mod files;
pub mod payments;
pub mod staff;
pub mod standards;
pub mod students;
pub mod subjects;
pub mod teachers;

pub use announcements::AnnouncementService;
pub use auth::AuthService;
pub use batches::BatchService;
pub use files::FileService;
pub use payments::PaymentService;
pub use staff::StaffService;
pub use standards::StandardService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use teachers::TeacherService;

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use crate::errors::TuitionError;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::{RefTable, Storage};
use crate::validation::{FieldError, Mode, RuleSet};

/// 从 app data 取出存储
pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

/// 字段校验失败响应，`data` 为字段错误列表
pub(crate) fn validation_failed(errors: Vec<FieldError>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error(
        ErrorCode::ValidationFailed,
        errors,
        "Validation failed",
    ))
}

/// 按规则校验请求体，通过后反序列化为请求结构
pub(crate) fn parse_body<T: DeserializeOwned>(
    rules: &RuleSet,
    mut body: Value,
    mode: Mode,
) -> Result<T, HttpResponse> {
    rules.validate(&body, mode).map_err(validation_failed)?;
    rules.clear_blank_values(&mut body);

    serde_json::from_value(body).map_err(|e| {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Invalid request body: {e}"),
        ))
    })
}

/// 存储层错误映射为 HTTP 响应
pub(crate) fn storage_error(context: &str, err: TuitionError) -> HttpResponse {
    match err {
        TuitionError::Conflict(msg) | TuitionError::Reference(msg) => HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::Conflict, msg)),
        TuitionError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, msg))
        }
        TuitionError::Validation(msg) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)),
        other => {
            error!("{context}: {other}");
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("{context}: {}", other.message()),
            ))
        }
    }
}

pub(crate) fn not_found(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

/// 一个待检查的引用字段
pub(crate) struct Reference {
    field: &'static str,
    table: RefTable,
    ids: Vec<String>,
}

impl Reference {
    pub(crate) fn one(field: &'static str, table: RefTable, id: Option<&str>) -> Self {
        Self {
            field,
            table,
            ids: id
                .filter(|id| !id.trim().is_empty())
                .map(|id| vec![id.to_string()])
                .unwrap_or_default(),
        }
    }

    pub(crate) fn many(field: &'static str, table: RefTable, ids: Option<&[String]>) -> Self {
        Self {
            field,
            table,
            ids: ids.map(<[String]>::to_vec).unwrap_or_default(),
        }
    }
}

fn table_label(table: RefTable) -> &'static str {
    match table {
        RefTable::Standards => "Standard",
        RefTable::Subjects => "Subject",
        RefTable::Teachers => "Teacher",
        RefTable::Staff => "Staff member",
        RefTable::Students => "Student",
        RefTable::Batches => "Batch",
    }
}

/// 检查引用的记录是否存在，返回字段错误
pub(crate) async fn check_references(
    storage: &Arc<dyn Storage>,
    references: Vec<Reference>,
) -> Result<Vec<FieldError>, TuitionError> {
    let mut errors = Vec::new();
    for reference in references {
        if reference.ids.is_empty() {
            continue;
        }
        let missing = storage
            .find_missing_ids(reference.table, &reference.ids)
            .await?;
        if missing.is_empty() {
            continue;
        }
        let label = table_label(reference.table);
        let message = if reference.ids.len() == 1 {
            format!("{label} not found")
        } else {
            format!("{label} not found: {}", missing.join(", "))
        };
        errors.push(FieldError::new(reference.field, message));
    }
    Ok(errors)
}

/// 引用检查，失败时直接给出响应
pub(crate) async fn ensure_references(
    storage: &Arc<dyn Storage>,
    references: Vec<Reference>,
) -> Result<(), HttpResponse> {
    match check_references(storage, references).await {
        Ok(errors) if errors.is_empty() => Ok(()),
        Ok(errors) => Err(validation_failed(errors)),
        Err(e) => Err(storage_error("Reference check failed", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldRule;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    fn rules() -> RuleSet {
        RuleSet::new().field(FieldRule::new("name").required("Name is required"))
    }

    #[test]
    fn test_parse_body_passes_valid_payload() {
        let parsed: Named = parse_body(&rules(), json!({"name": "Class 10"}), Mode::Create)
            .expect("valid body");
        assert_eq!(parsed.name, "Class 10");
    }

    #[test]
    fn test_parse_body_drops_blank_optional_numbers() {
        #[derive(Debug, Deserialize)]
        struct Scored {
            name: String,
            score: Option<f64>,
            #[serde(default)]
            rank: i32,
        }

        let rules = rules()
            .field(FieldRule::new("score").number(Some(0.0), Some(100.0), "Invalid score"))
            .field(FieldRule::new("rank").integer(Some(0), None, "Invalid rank"));
        let parsed: Scored = parse_body(
            &rules,
            json!({"name": "Asha", "score": "", "rank": ""}),
            Mode::Create,
        )
        .expect("blank optional numbers");
        assert_eq!(parsed.name, "Asha");
        assert_eq!(parsed.score, None);
        assert_eq!(parsed.rank, 0);
    }

    #[actix_web::test]
    async fn test_parse_body_reports_field_errors() {
        let response = parse_body::<Named>(&rules(), json!({}), Mode::Create).unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body()).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["code"], ErrorCode::ValidationFailed.as_i32());
        assert_eq!(value["data"][0]["field"], "name");
    }

    #[test]
    fn test_storage_error_status_mapping() {
        assert_eq!(
            storage_error("x", TuitionError::conflict("dup")).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            storage_error("x", TuitionError::reference("fk")).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            storage_error("x", TuitionError::not_found("gone")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            storage_error("x", TuitionError::database_operation("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_blank_single_reference_is_skipped() {
        let reference = Reference::one("batch", RefTable::Batches, Some("  "));
        assert!(reference.ids.is_empty());
    }
}
