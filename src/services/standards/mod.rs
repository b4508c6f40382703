pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::models::standards::requests::StandardListParams;
use crate::storage::Storage;

pub struct StandardService {
    storage: Option<Arc<dyn Storage>>,
}

impl StandardService {
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

    pub async fn create_standard(
        &self,
        request: &HttpRequest,
        body: Value,
    ) -> ActixResult<HttpResponse> {
        create::create_standard(self, request, body).await
    }

    pub async fn list_standards(
        &self,
        request: &HttpRequest,
        query: StandardListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_standards(self, request, query).await
    }

    pub async fn get_standard(
        &self,
        request: &HttpRequest,
        standard_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_standard(self, request, standard_id).await
    }

    pub async fn update_standard(
        &self,
        request: &HttpRequest,
        standard_id: String,
        body: Value,
    ) -> ActixResult<HttpResponse> {
        update::update_standard(self, request, standard_id, body).await
    }

    pub async fn delete_standard(
        &self,
        request: &HttpRequest,
        standard_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_standard(self, request, standard_id).await
    }
}
