pub mod create;
pub mod delete;
pub mod enroll;
pub mod get;
pub mod list;
pub mod students;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::models::batches::entities::Batch;
use crate::models::batches::requests::BatchListParams;
use crate::models::ErrorCode;
use crate::services::{not_found, storage_error};
use crate::storage::Storage;

pub struct BatchService {
    storage: Option<Arc<dyn Storage>>,
}

impl BatchService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            super::storage_from_request(request)
        }
    }

    pub async fn create_batch(&self, request: &HttpRequest, body: Value) -> ActixResult<HttpResponse> {
        create::create_batch(self, request, body).await
    }

    pub async fn list_batches(
        &self,
        request: &HttpRequest,
        query: BatchListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_batches(self, request, query).await
    }

    pub async fn get_batch(&self, request: &HttpRequest, batch_id: String) -> ActixResult<HttpResponse> {
        get::get_batch(self, request, batch_id).await
    }

    pub async fn update_batch(
        &self,
        request: &HttpRequest,
        batch_id: String,
        body: Value,
    ) -> ActixResult<HttpResponse> {
        update::update_batch(self, request, batch_id, body).await
    }

    pub async fn delete_batch(
        &self,
        request: &HttpRequest,
        batch_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_batch(self, request, batch_id).await
    }

    // 批量报名，逐个返回结果
    pub async fn enroll_students(
        &self,
        request: &HttpRequest,
        batch_id: String,
        body: Value,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll_students(self, request, batch_id, body).await
    }

    pub async fn unenroll_student(
        &self,
        request: &HttpRequest,
        batch_id: String,
        student_id: String,
    ) -> ActixResult<HttpResponse> {
        enroll::unenroll_student(self, request, batch_id, student_id).await
    }

    pub async fn list_batch_students(
        &self,
        request: &HttpRequest,
        batch_id: String,
    ) -> ActixResult<HttpResponse> {
        students::list_batch_students(self, request, batch_id).await
    }

    pub async fn list_available_students(
        &self,
        request: &HttpRequest,
        batch_id: String,
    ) -> ActixResult<HttpResponse> {
        students::list_available_students(self, request, batch_id).await
    }
}

/// 读取班次，不存在或出错时给出响应
pub(crate) async fn load_batch(
    storage: &Arc<dyn Storage>,
    batch_id: &str,
) -> Result<Batch, HttpResponse> {
    match storage.get_batch_by_id(batch_id).await {
        Ok(Some(batch)) => Ok(batch),
        Ok(None) => Err(not_found(ErrorCode::BatchNotFound, "Batch not found")),
        Err(e) => Err(storage_error("Failed to get batch", e)),
    }
}
