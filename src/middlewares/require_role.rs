/*!
 * 基于角色的访问控制中间件
 *
 * 必须挂在 RequireJWT 之后，读取其写入请求扩展的登录账号。
 *
 * ```rust,ignore
 * web::resource("")
 *     .route(web::get().to(list_batches))
 *     .route(
 *         web::post()
 *             .to(create_batch)
 *             .wrap(RequireRole::new_any(UserRole::admin_roles())),
 *     )
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::models::{
    ErrorCode,
    users::entities::{User, UserRole},
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireRole {
    allowed_roles: Rc<[UserRole]>,
}

impl RequireRole {
    /// 仅允许指定角色
    pub fn new(role: &UserRole) -> Self {
        Self {
            allowed_roles: Rc::from(vec![*role]),
        }
    }

    /// 允许列表中的任一角色
    pub fn new_any(roles: &[&UserRole]) -> Self {
        Self {
            allowed_roles: roles.iter().map(|r| **r).collect(),
        }
    }

    fn permits(&self, role: UserRole) -> bool {
        self.allowed_roles.contains(&role)
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            rule: self.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    rule: RequireRole,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let rule = self.rule.clone();

        Box::pin(async move {
            let account = req
                .extensions()
                .get::<User>()
                .map(|user| (user.id.clone(), user.role));

            let Some((user_id, role)) = account else {
                info!("Role check reached without an authenticated user");
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::Unauthorized,
                        "Authentication required",
                    )
                    .map_into_right_body(),
                ));
            };

            if !rule.permits(role) {
                info!(
                    "Access denied for user {} (role: {}) on {} {}",
                    user_id,
                    role,
                    req.method(),
                    req.path()
                );
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::FORBIDDEN,
                        ErrorCode::PermissionDenied,
                        "You do not have permission to perform this action",
                    )
                    .map_into_right_body(),
                ));
            }

            Ok(srv.call(req).await?.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserStatus;
    use actix_web::test::{TestRequest, call_service, init_service};
    use actix_web::{App, HttpResponse, web};

    fn account(role: UserRole) -> User {
        let now = chrono::Utc::now();
        User {
            id: "u-1".to_string(),
            email: "someone@tuition.local".to_string(),
            password_hash: String::new(),
            name: "Someone".to_string(),
            role,
            status: UserStatus::Active,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_admin_only_rule() {
        let rule = RequireRole::new_any(UserRole::admin_roles());
        assert!(rule.permits(UserRole::Admin));
        assert!(!rule.permits(UserRole::Teacher));
    }

    #[actix_web::test]
    async fn test_teacher_mutation_is_forbidden() {
        let app = init_service(
            App::new()
                .wrap_fn(|req, srv| {
                    req.extensions_mut().insert(account(UserRole::Teacher));
                    srv.call(req)
                })
                .route(
                    "/",
                    web::post()
                        .to(HttpResponse::Ok)
                        .wrap(RequireRole::new(&UserRole::Admin)),
                ),
        )
        .await;

        let resp = call_service(&app, TestRequest::post().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_missing_user_is_unauthorized() {
        let app = init_service(
            App::new().route(
                "/",
                web::post()
                    .to(HttpResponse::Ok)
                    .wrap(RequireRole::new(&UserRole::Admin)),
            ),
        )
        .await;

        let resp = call_service(&app, TestRequest::post().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
