pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::models::payments::requests::PaymentListParams;
use crate::storage::Storage;

pub struct PaymentService {
    storage: Option<Arc<dyn Storage>>,
}

impl PaymentService {
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

    pub async fn create_payment(&self, request: &HttpRequest, body: Value) -> ActixResult<HttpResponse> {
        create::create_payment(self, request, body).await
    }

    pub async fn list_payments(
        &self,
        request: &HttpRequest,
        query: PaymentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_payments(self, request, query).await
    }

    pub async fn get_payment(&self, request: &HttpRequest, payment_id: String) -> ActixResult<HttpResponse> {
        get::get_payment(self, request, payment_id).await
    }

    pub async fn update_payment(
        &self,
        request: &HttpRequest,
        payment_id: String,
        body: Value,
    ) -> ActixResult<HttpResponse> {
        update::update_payment(self, request, payment_id, body).await
    }

    pub async fn delete_payment(&self, request: &HttpRequest, payment_id: String) -> ActixResult<HttpResponse> {
        delete::delete_payment(self, request, payment_id).await
    }
}
