use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::BatchService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, storage_error};

pub async fn delete_batch(
    service: &BatchService,
    request: &HttpRequest,
    batch_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 报名记录随班次删除，缴费记录解除关联
    match storage.delete_batch(&batch_id).await {
        Ok(true) => {
            info!("Batch {} deleted", batch_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Batch deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::BatchNotFound, "Batch not found")),
        Err(e) => Ok(storage_error("Failed to delete batch", e)),
    }
}
