use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::utils::jwt::JwtUtils;

use super::AuthService;

/// 处理登出
///
/// 令牌本身无状态，这里只移除中间件缓存的用户信息，客户端负责丢弃令牌。
pub async fn handle_logout(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let (Some(token), Some(cache)) = (
        JwtUtils::extract_bearer_token(request),
        service.get_cache(request),
    ) {
        cache.remove(&format!("user:{token}")).await;
    }

    if let Some(user_id) = RequireJWT::extract_user_id(request) {
        info!("User {} logged out", user_id);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Logout successful")))
}
