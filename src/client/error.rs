use crate::validation::FieldError;

/// 会话失效后前端应跳转的位置
pub const LOGIN_REDIRECT: &str = "/login";

/// API 客户端错误
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// 网络、TLS 或响应体读取失败
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 令牌缺失、无效或过期，本地会话已被清除
    #[error("Session expired, redirect to {redirect}")]
    Unauthorized { redirect: &'static str },

    /// 服务端字段校验失败
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    /// 其他非 2xx 响应
    #[error("API error ({status}, code {code}): {message}")]
    Api {
        status: u16,
        code: i32,
        message: String,
    },

    /// 成功响应里缺少预期的数据
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// 会话持久化失败
    #[error("Session store error: {0}")]
    Session(String),
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ClientError {
    pub fn unauthorized() -> Self {
        ClientError::Unauthorized {
            redirect: LOGIN_REDIRECT,
        }
    }

    /// 跳转目标，仅认证失败时存在
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            ClientError::Unauthorized { redirect } => Some(redirect),
            _ => None,
        }
    }

    /// 指定字段的校验信息
    pub fn field_message(&self, field: &str) -> Option<&str> {
        match self {
            ClientError::Validation(errors) => errors
                .iter()
                .find(|e| e.field == field)
                .map(|e| e.message.as_str()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Session(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_carries_login_redirect() {
        let err = ClientError::unauthorized();
        assert_eq!(err.redirect(), Some("/login"));
        assert_eq!(err.to_string(), "Session expired, redirect to /login");
    }

    #[test]
    fn test_validation_message_lookup() {
        let err = ClientError::Validation(vec![
            FieldError::new("name", "Name is required"),
            FieldError::new("endDate", "End date must be after start date"),
        ]);
        assert_eq!(
            err.field_message("endDate"),
            Some("End date must be after start date")
        );
        assert!(err.field_message("phone").is_none());
        assert!(err.to_string().contains("name: Name is required"));
    }
}
