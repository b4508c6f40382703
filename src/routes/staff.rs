use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares;
use crate::models::staff::requests::StaffListParams;
use crate::models::users::entities::UserRole;
use crate::services::StaffService;
use crate::utils::SafeId;

static STAFF_SERVICE: Lazy<StaffService> = Lazy::new(StaffService::new_lazy);

pub async fn list_staff(
    req: HttpRequest,
    query: web::Query<StaffListParams>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.list_staff(&req, query.into_inner()).await
}

pub async fn create_staff(req: HttpRequest, body: web::Json<Value>) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.create_staff(&req, body.into_inner()).await
}

pub async fn get_staff(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.get_staff(&req, id.0).await
}

pub async fn update_staff(
    req: HttpRequest,
    id: SafeId,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.update_staff(&req, id.0, body.into_inner()).await
}

pub async fn delete_staff(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.delete_staff(&req, id.0).await
}

// 职员：登录即可读取，写操作仅管理员
pub fn configure_staff_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/staff")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_staff))
                    .route(
                        web::post()
                            .to(create_staff)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_staff))
                    .route(
                        web::put()
                            .to(update_staff)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_staff)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
