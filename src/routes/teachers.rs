use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares;
use crate::models::teachers::requests::TeacherListParams;
use crate::models::users::entities::UserRole;
use crate::services::TeacherService;
use crate::utils::SafeId;

static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

pub async fn list_teachers(
    req: HttpRequest,
    query: web::Query<TeacherListParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(&req, query.into_inner()).await
}

pub async fn create_teacher(req: HttpRequest, body: web::Json<Value>) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.create_teacher(&req, body.into_inner()).await
}

pub async fn get_teacher(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_teacher(&req, id.0).await
}

pub async fn update_teacher(
    req: HttpRequest,
    id: SafeId,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.update_teacher(&req, id.0, body.into_inner()).await
}

pub async fn delete_teacher(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.delete_teacher(&req, id.0).await
}

// 教师：登录即可读取，写操作仅管理员
pub fn configure_teachers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/teachers")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_teachers))
                    .route(
                        web::post()
                            .to(create_teacher)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_teacher))
                    .route(
                        web::put()
                            .to(update_teacher)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_teacher)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
