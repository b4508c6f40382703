use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares;
use crate::models::payments::requests::PaymentListParams;
use crate::models::users::entities::UserRole;
use crate::services::PaymentService;
use crate::utils::SafeId;

static PAYMENT_SERVICE: Lazy<PaymentService> = Lazy::new(PaymentService::new_lazy);

pub async fn list_payments(
    req: HttpRequest,
    query: web::Query<PaymentListParams>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.list_payments(&req, query.into_inner()).await
}

pub async fn create_payment(req: HttpRequest, body: web::Json<Value>) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.create_payment(&req, body.into_inner()).await
}

pub async fn get_payment(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.get_payment(&req, id.0).await
}

pub async fn update_payment(
    req: HttpRequest,
    id: SafeId,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.update_payment(&req, id.0, body.into_inner()).await
}

pub async fn delete_payment(req: HttpRequest, id: SafeId) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.delete_payment(&req, id.0).await
}

// 缴费：登录即可读取，写操作仅管理员
pub fn configure_payments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/payments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_payments))
                    .route(
                        web::post()
                            .to(create_payment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_payment))
                    .route(
                        web::put()
                            .to(update_payment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_payment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
