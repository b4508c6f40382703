use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::models::auth::rules::LOGIN_RULES;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::services::{parse_body, storage_error};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;
use crate::validation::Mode;

use super::AuthService;

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::AuthFailed,
        "Invalid email or password",
    ))
}

pub async fn handle_login(
    service: &AuthService,
    body: Value,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let login_request: LoginRequest = match parse_body(&LOGIN_RULES, body, Mode::Create) {
        Ok(login_request) => login_request,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    // 1. 根据邮箱获取账号
    let user = match storage.get_user_by_email(&login_request.email).await {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(invalid_credentials()),
        Err(e) => return Ok(storage_error("Login failed", e)),
    };

    // 2. 验证密码
    if !verify_password(&login_request.password, &user.password_hash) {
        warn!("Failed login attempt for {}", user.email);
        return Ok(invalid_credentials());
    }

    if !user.is_active() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::AccountInactive,
            "Account is inactive",
        )));
    }

    // 3. 更新最后登录时间
    if let Err(e) = storage.update_last_login(&user.id).await {
        warn!("Failed to update last login for {}: {}", user.id, e);
    }

    // 4. 签发令牌
    match JwtUtils::generate_token(&user.id, user.role.as_str()) {
        Ok((token, expires_in)) => {
            info!("User {} logged in successfully", user.email);
            let response = LoginResponse {
                token,
                expires_in,
                user,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
