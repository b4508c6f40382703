pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::models::staff::requests::StaffListParams;
use crate::storage::Storage;

pub struct StaffService {
    storage: Option<Arc<dyn Storage>>,
}

impl StaffService {
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

    pub async fn create_staff(&self, request: &HttpRequest, body: Value) -> ActixResult<HttpResponse> {
        create::create_staff(self, request, body).await
    }

    pub async fn list_staff(
        &self,
        request: &HttpRequest,
        query: StaffListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_staff(self, request, query).await
    }

    pub async fn get_staff(&self, request: &HttpRequest, staff_id: String) -> ActixResult<HttpResponse> {
        get::get_staff(self, request, staff_id).await
    }

    pub async fn update_staff(
        &self,
        request: &HttpRequest,
        staff_id: String,
        body: Value,
    ) -> ActixResult<HttpResponse> {
        update::update_staff(self, request, staff_id, body).await
    }

    pub async fn delete_staff(
        &self,
        request: &HttpRequest,
        staff_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_staff(self, request, staff_id).await
    }
}
