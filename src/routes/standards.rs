use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares;
use crate::models::standards::requests::StandardListParams;
use crate::models::users::entities::UserRole;
use crate::services::StandardService;
use crate::utils::SafeId;

static STANDARD_SERVICE: Lazy<StandardService> = Lazy::new(StandardService::new_lazy);

pub async fn list_standards(
    req: HttpRequest,
    query: web::Query<StandardListParams>,
) -> ActixResult<HttpResponse> {
    STANDARD_SERVICE.list_standards(&req, query.into_inner()).await
}

pub async fn create_standard(req: HttpRequest, body: web::Json<Value>) -> ActixResult<HttpResponse> {
    STANDARD_SERVICE.create_standard(&req, body.into_inner()).await
}

pub async fn get_standard(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse> {
    STANDARD_SERVICE.get_standard(&req, id.0).await
}

pub async fn update_standard(
    req: HttpRequest,
    id: SafeId,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    STANDARD_SERVICE.update_standard(&req, id.0, body.into_inner()).await
}

pub async fn delete_standard(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse> {
    STANDARD_SERVICE.delete_standard(&req, id.0).await
}

// 年级：登录即可读取，写操作仅管理员
pub fn configure_standards_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/standards")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_standards))
                    .route(
                        web::post()
                            .to(create_standard)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_standard))
                    .route(
                        web::put()
                            .to(update_standard)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_standard)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
