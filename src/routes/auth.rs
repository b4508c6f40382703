use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares;
use crate::services::AuthService;

static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login(req: HttpRequest, body: web::Json<Value>) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(body.into_inner(), &req).await
}

pub async fn me(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.me(&req).await
}

pub async fn logout(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&req).await
}

pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(
                web::resource("/login")
                    .wrap(middlewares::RateLimit::login())
                    .route(web::post().to(login)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/me", web::get().to(me))
                    .route("/logout", web::post().to(logout)),
            ),
    );
}
