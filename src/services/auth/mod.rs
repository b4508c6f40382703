pub mod login;
pub mod logout;
pub mod me;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
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

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> Option<Arc<dyn ObjectCache>> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
            .map(|cache| cache.get_ref().clone())
    }

    // 登录验证
    pub async fn login(&self, body: Value, request: &HttpRequest) -> ActixResult<HttpResponse> {
        login::handle_login(self, body, request).await
    }

    // 当前用户
    pub async fn me(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        me::handle_me(request).await
    }

    // 登出，清除令牌对应的用户缓存
    pub async fn logout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        logout::handle_logout(self, request).await
    }
}
