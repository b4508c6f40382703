use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::FileService;
use crate::utils::SafeId;

static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

pub async fn handle_upload(
    request: HttpRequest,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    FILE_SERVICE.handle_upload(&request, payload).await
}

pub async fn handle_download(request: HttpRequest, file_id: SafeId) -> ActixResult<HttpResponse> {
    FILE_SERVICE.handle_download(&request, file_id.0).await
}

pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/files")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/upload")
                    .wrap(middlewares::RateLimit::upload())
                    .route(web::post().to(handle_upload)),
            )
            .service(
                web::resource("/{id}")
                    .wrap(middleware::Compress::default())
                    .route(web::get().to(handle_download)),
            ),
    );
}
