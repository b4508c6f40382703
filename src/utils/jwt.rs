use crate::config::AppConfig;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // Subject (user ID)
    pub role: String, // 用户角色
    pub exp: usize,   // Expiration time (时间戳)
    pub iat: usize,   // Issued at (签发时间)
}

/// 解析令牌有效期，返回秒数
///
/// 支持 `<n>s`、`<n>m`、`<n>h`、`<n>d` 以及纯数字（秒），n 必须大于 0。
pub fn parse_expiry(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let (number, multiplier) = match value.chars().last()? {
        's' => (&value[..value.len() - 1], 1),
        'm' => (&value[..value.len() - 1], 60),
        'h' => (&value[..value.len() - 1], 3600),
        'd' => (&value[..value.len() - 1], 86_400),
        c if c.is_ascii_digit() => (value, 1),
        _ => return None,
    };

    let number: i64 = number.parse().ok()?;
    if number <= 0 {
        return None;
    }
    number.checked_mul(multiplier)
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    /// 令牌有效期（秒）
    pub fn expires_in() -> i64 {
        parse_expiry(&AppConfig::get().jwt.expire).unwrap_or(86_400)
    }

    /// 为用户签发令牌，返回令牌和有效期（秒）
    pub fn generate_token(
        user_id: &str,
        role: &str,
    ) -> Result<(String, i64), jsonwebtoken::errors::Error> {
        let expires_in = Self::expires_in();
        let token = Self::generate_token_with_secret(
            user_id,
            role,
            chrono::Duration::seconds(expires_in),
            Self::get_secret().as_bytes(),
        )?;
        Ok((token, expires_in))
    }

    // 生成带自定义过期时间的 Token
    pub fn generate_token_with_secret(
        user_id: &str,
        role: &str,
        expiry_duration: chrono::Duration,
        secret: &[u8],
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            exp: expiration.timestamp().max(0) as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
    }

    // 验证 JWT token
    pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_with_secret(token, Self::get_secret().as_bytes())
    }

    pub fn verify_token_with_secret(
        token: &str,
        secret: &[u8],
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(secret);
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }

    /// 从 `Authorization: Bearer <token>` 头中取出令牌
    pub fn extract_bearer_token(req: &actix_web::HttpRequest) -> Option<String> {
        req.headers()
            .get(actix_web::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"unit-test-secret";

    #[test]
    fn test_parse_expiry_units() {
        assert_eq!(parse_expiry("3600"), Some(3600));
        assert_eq!(parse_expiry("30s"), Some(30));
        assert_eq!(parse_expiry("15m"), Some(900));
        assert_eq!(parse_expiry("12h"), Some(43_200));
        assert_eq!(parse_expiry("7d"), Some(604_800));
    }

    #[test]
    fn test_parse_expiry_rejects_garbage() {
        assert_eq!(parse_expiry(""), None);
        assert_eq!(parse_expiry("0"), None);
        assert_eq!(parse_expiry("-5m"), None);
        assert_eq!(parse_expiry("7w"), None);
        assert_eq!(parse_expiry("d"), None);
    }

    #[test]
    fn test_token_carries_subject_and_role() {
        let token =
            JwtUtils::generate_token_with_secret("user-1", "admin", chrono::Duration::hours(1), SECRET)
                .unwrap();
        let claims = JwtUtils::verify_token_with_secret(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = JwtUtils::generate_token_with_secret(
            "user-1",
            "teacher",
            chrono::Duration::seconds(-10),
            SECRET,
        )
        .unwrap();
        assert!(JwtUtils::verify_token_with_secret(&token, SECRET).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token =
            JwtUtils::generate_token_with_secret("user-1", "admin", chrono::Duration::hours(1), SECRET)
                .unwrap();
        assert!(JwtUtils::verify_token_with_secret(&token, b"other-secret").is_err());
    }
}
