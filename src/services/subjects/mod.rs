pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::models::subjects::requests::SubjectListParams;
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
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

    pub async fn create_subject(
        &self,
        request: &HttpRequest,
        body: Value,
    ) -> ActixResult<HttpResponse> {
        create::create_subject(self, request, body).await
    }

    pub async fn list_subjects(
        &self,
        request: &HttpRequest,
        query: SubjectListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_subjects(self, request, query).await
    }

    pub async fn get_subject(
        &self,
        request: &HttpRequest,
        subject_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_subject(self, request, subject_id).await
    }

    pub async fn update_subject(
        &self,
        request: &HttpRequest,
        subject_id: String,
        body: Value,
    ) -> ActixResult<HttpResponse> {
        update::update_subject(self, request, subject_id, body).await
    }

    // 删除科目，年级和教师的科目列表同步移除
    pub async fn delete_subject(
        &self,
        request: &HttpRequest,
        subject_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_subject(self, request, subject_id).await
    }
}
