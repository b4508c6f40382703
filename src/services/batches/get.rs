use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{BatchService, load_batch};
use crate::models::ApiResponse;

pub async fn get_batch(
    service: &BatchService,
    request: &HttpRequest,
    batch_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_batch(&storage, &batch_id).await {
        Ok(batch) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            batch,
            "Batch retrieved successfully",
        ))),
        Err(response) => Ok(response),
    }
}
