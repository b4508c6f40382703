pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::models::announcements::requests::AnnouncementListParams;
use crate::storage::Storage;

pub struct AnnouncementService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnnouncementService {
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

    pub async fn create_announcement(&self, request: &HttpRequest, body: Value) -> ActixResult<HttpResponse> {
        create::create_announcement(self, request, body).await
    }

    pub async fn list_announcements(
        &self,
        request: &HttpRequest,
        query: AnnouncementListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_announcements(self, request, query).await
    }

    pub async fn get_announcement(&self, request: &HttpRequest, announcement_id: String) -> ActixResult<HttpResponse> {
        get::get_announcement(self, request, announcement_id).await
    }

    pub async fn update_announcement(
        &self,
        request: &HttpRequest,
        announcement_id: String,
        body: Value,
    ) -> ActixResult<HttpResponse> {
        update::update_announcement(self, request, announcement_id, body).await
    }

    pub async fn delete_announcement(&self, request: &HttpRequest, announcement_id: String) -> ActixResult<HttpResponse> {
        delete::delete_announcement(self, request, announcement_id).await
    }
}
