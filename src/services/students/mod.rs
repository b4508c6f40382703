pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::models::students::requests::StudentListParams;
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    pub async fn create_student(&self, request: &HttpRequest, body: Value) -> ActixResult<HttpResponse> {
        create::create_student(self, request, body).await
    }

    pub async fn list_students(
        &self,
        request: &HttpRequest,
        query: StudentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, request, query).await
    }

    pub async fn get_student(&self, request: &HttpRequest, student_id: String) -> ActixResult<HttpResponse> {
        get::get_student(self, request, student_id).await
    }

    pub async fn update_student(
        &self,
        request: &HttpRequest,
        student_id: String,
        body: Value,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, request, student_id, body).await
    }

    pub async fn delete_student(&self, request: &HttpRequest, student_id: String) -> ActixResult<HttpResponse> {
        delete::delete_student(self, request, student_id).await
    }
}
