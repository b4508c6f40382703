//! 路径参数提取器
//!
//! 路径中的资源 ID 必须是合法的 UUID，否则直接返回 400。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::is_valid_id;

fn extract_id(req: &HttpRequest, name: &str) -> Result<String, actix_web::Error> {
    let raw = req.match_info().get(name).unwrap_or_default();
    if is_valid_id(raw) {
        return Ok(raw.to_string());
    }

    let message = format!("Invalid {name}: '{raw}'");
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::error_empty(ErrorCode::InvalidId, message.clone()));
    Err(InternalError::from_response(message, response).into())
}

macro_rules! define_safe_id {
    ($(#[$meta:meta])* $name:ident, $param:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name(pub String);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                ready(extract_id(req, $param).map($name))
            }
        }
    };
}

define_safe_id!(
    /// `{id}` 路径参数
    SafeId,
    "id"
);

define_safe_id!(
    /// `{student_id}` 路径参数
    SafeStudentId,
    "student_id"
);

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_uuid_is_extracted() {
        let id = "6f1f8c1e-2a8e-4c55-9a8e-3c2f1f0e7d11";
        let req = TestRequest::default().param("id", id).to_http_request();
        let extracted = SafeId::extract(&req).await.unwrap();
        assert_eq!(extracted.0, id);
    }

    #[actix_web::test]
    async fn test_malformed_id_is_bad_request() {
        let req = TestRequest::default().param("id", "42").to_http_request();
        let err = SafeId::extract(&req).await.unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
    }
}
