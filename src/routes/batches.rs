use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares;
use crate::models::batches::requests::BatchListParams;
use crate::models::users::entities::UserRole;
use crate::services::BatchService;
use crate::utils::{SafeId, SafeStudentId};

static BATCH_SERVICE: Lazy<BatchService> = Lazy::new(BatchService::new_lazy);

pub async fn list_batches(
    req: HttpRequest,
    query: web::Query<BatchListParams>,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.list_batches(&req, query.into_inner()).await
}

pub async fn create_batch(req: HttpRequest, body: web::Json<Value>) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.create_batch(&req, body.into_inner()).await
}

pub async fn get_batch(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.get_batch(&req, id.0).await
}

pub async fn update_batch(
    req: HttpRequest,
    id: SafeId,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE
        .update_batch(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_batch(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.delete_batch(&req, id.0).await
}

pub async fn list_batch_students(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.list_batch_students(&req, id.0).await
}

pub async fn list_available_students(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.list_available_students(&req, id.0).await
}

pub async fn enroll_students(
    req: HttpRequest,
    id: SafeId,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE
        .enroll_students(&req, id.0, body.into_inner())
        .await
}

pub async fn unenroll_student(
    req: HttpRequest,
    id: SafeId,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE
        .unenroll_student(&req, id.0, student_id.0)
        .await
}

pub fn configure_batches_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/batches")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_batches))
                    .route(
                        web::post()
                            .to(create_batch)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_batch))
                    .route(
                        web::put()
                            .to(update_batch)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_batch)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            // 报名：整批提交，逐个返回结果
            .service(
                web::resource("/{id}/students")
                    .route(web::get().to(list_batch_students))
                    .route(
                        web::post()
                            .to(enroll_students)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/available-students")
                    .route(web::get().to(list_available_students)),
            )
            .service(
                web::resource("/{id}/students/{student_id}").route(
                    web::delete()
                        .to(unenroll_student)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            ),
    );
}
