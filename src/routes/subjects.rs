use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares;
use crate::models::subjects::requests::SubjectListParams;
use crate::models::users::entities::UserRole;
use crate::services::SubjectService;
use crate::utils::SafeId;

static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

pub async fn list_subjects(
    req: HttpRequest,
    query: web::Query<SubjectListParams>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(&req, query.into_inner()).await
}

pub async fn create_subject(req: HttpRequest, body: web::Json<Value>) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.create_subject(&req, body.into_inner()).await
}

pub async fn get_subject(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.get_subject(&req, id.0).await
}

pub async fn update_subject(
    req: HttpRequest,
    id: SafeId,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.update_subject(&req, id.0, body.into_inner()).await
}

pub async fn delete_subject(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.delete_subject(&req, id.0).await
}

// 科目：登录即可读取，写操作仅管理员
pub fn configure_subjects_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/subjects")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_subjects))
                    .route(
                        web::post()
                            .to(create_subject)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_subject))
                    .route(
                        web::put()
                            .to(update_subject)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_subject)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
