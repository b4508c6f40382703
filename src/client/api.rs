//! 带认证的 HTTP 客户端
//!
//! 每个请求自动附带当前会话的 Bearer 令牌，并把统一响应结构
//! `{code, message, data, timestamp}` 拆成 `Result`。收到 401 时清除
//! 会话并返回 `ClientError::Unauthorized`。

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use super::error::ClientError;
use super::session::{Session, SessionContext};
use crate::models::ErrorCode;
use crate::models::auth::LoginResponse;
use crate::models::users::entities::User;
use crate::validation::FieldError;

#[derive(serde::Deserialize)]
struct Envelope {
    code: i32,
    message: String,
    data: Option<Value>,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionContext>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Arc<SessionContext>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, session)
    }

    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        session: Arc<SessionContext>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// 登录成功后写入会话
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response: LoginResponse = self
            .send(self.request(Method::POST, "auth/login").json(&body))
            .await?;
        self.session.set(Session {
            token: response.token,
            user: response.user.clone(),
        })?;
        Ok(response.user)
    }

    /// 通知服务端清除缓存，本地会话无论如何都会清除
    pub async fn logout(&self) -> Result<(), ClientError> {
        if self.session.is_authenticated()
            && let Err(e) = self
                .send_empty(self.request(Method::POST, "auth/logout"))
                .await
        {
            debug!("Server-side logout failed: {}", e);
        }
        self.session.clear()
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.send_empty(self.request(Method::DELETE, path)).await
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let data = self
            .execute(builder)
            .await?
            .ok_or_else(|| ClientError::Decode("response carried no data".to_string()))?;
        Ok(serde_json::from_value(data)?)
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ClientError> {
        self.execute(builder).await.map(|_| ())
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Option<Value>, ClientError> {
        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("Request rejected with 401, clearing session");
            self.session.clear()?;
            return Err(ClientError::unauthorized());
        }

        let bytes = response.bytes().await?;
        let envelope: Envelope = serde_json::from_slice(&bytes).map_err(|e| {
            ClientError::Decode(format!("non-envelope response with status {status}: {e}"))
        })?;

        if status.is_success() {
            return Ok(envelope.data);
        }
        Err(into_error(status, envelope))
    }
}

fn into_error(status: StatusCode, envelope: Envelope) -> ClientError {
    if envelope.code == ErrorCode::ValidationFailed.as_i32()
        && let Some(data) = envelope.data.clone()
        && let Ok(errors) = serde_json::from_value::<Vec<FieldError>>(data)
    {
        return ClientError::Validation(errors);
    }
    ClientError::Api {
        status: status.as_u16(),
        code: envelope.code,
        message: envelope.message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::session::MemorySessionStore;
    use serde_json::json;

    fn envelope(value: Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_validation_envelope_becomes_field_errors() {
        let err = into_error(
            StatusCode::BAD_REQUEST,
            envelope(json!({
                "code": ErrorCode::ValidationFailed.as_i32(),
                "message": "Validation failed",
                "data": [{"field": "endDate", "message": "End date must be after start date"}],
                "timestamp": "2024-01-01T00:00:00Z"
            })),
        );
        assert_eq!(
            err.field_message("endDate"),
            Some("End date must be after start date")
        );
    }

    #[test]
    fn test_other_errors_keep_status_and_message() {
        let err = into_error(
            StatusCode::CONFLICT,
            envelope(json!({
                "code": ErrorCode::BatchClosed.as_i32(),
                "message": "Batch is not accepting enrollments",
                "timestamp": "2024-01-01T00:00:00Z"
            })),
        );
        match err {
            ClientError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 409);
                assert_eq!(code, ErrorCode::BatchClosed.as_i32());
                assert_eq!(message, "Batch is not accepting enrollments");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_url_joins_api_prefix() {
        let session = Arc::new(SessionContext::new(Arc::new(MemorySessionStore::new())).unwrap());
        let client = ApiClient::new("http://localhost:8080/", session);
        assert_eq!(
            client.url("/batches/b-1/students"),
            "http://localhost:8080/api/batches/b-1/students"
        );
    }
}
