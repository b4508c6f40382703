pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::models::teachers::requests::TeacherListParams;
use crate::storage::Storage;

/// 教师档案与其登录账号一起维护
pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
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

    pub async fn create_teacher(
        &self,
        request: &HttpRequest,
        body: Value,
    ) -> ActixResult<HttpResponse> {
        create::create_teacher(self, request, body).await
    }

    pub async fn list_teachers(
        &self,
        request: &HttpRequest,
        query: TeacherListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_teachers(self, request, query).await
    }

    pub async fn get_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_teacher(self, request, teacher_id).await
    }

    pub async fn update_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: String,
        body: Value,
    ) -> ActixResult<HttpResponse> {
        update::update_teacher(self, request, teacher_id, body).await
    }

    pub async fn delete_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_teacher(self, request, teacher_id).await
    }
}
