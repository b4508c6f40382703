/*!
 * 速率限制中间件
 *
 * 固定窗口计数：同一个键在 `window_secs` 内最多放行 `max_requests` 次，
 * 超出返回 429 并携带 `Retry-After`。
 *
 * 已认证请求按账号 ID 计数，匿名请求按客户端 IP 计数。
 *
 * ```rust,ignore
 * web::resource("/login")
 *     .wrap(RateLimit::login())
 *     .route(web::post().to(login))
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::{CONTENT_TYPE, HeaderName, HeaderValue, RETRY_AFTER},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::net::IpAddr;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode, users::entities::User};

/// 键: 前缀:身份，值: (窗口起点, 已计数)
static RATE_LIMIT_CACHE: Lazy<Cache<String, (Instant, u32)>> = Lazy::new(|| {
    Cache::builder()
        .time_to_idle(Duration::from_secs(3600))
        .max_capacity(100_000)
        .build()
});

#[derive(Clone)]
pub struct RateLimit {
    max_requests: u32,
    window_secs: u64,
    key_prefix: String,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 登录：每个 IP 每分钟 5 次
    pub fn login() -> Self {
        Self::new(5, 60).with_prefix("login")
    }

    /// 文件上传：每个账号每分钟 10 次
    pub fn upload() -> Self {
        Self::new(10, 60).with_prefix("upload")
    }
}

/// 窗口内的计数结果
#[derive(Debug, PartialEq, Eq)]
enum Decision {
    Allow { remaining: u32 },
    Reject { retry_after: u64 },
}

fn decide(
    previous: Option<(Instant, u32)>,
    now: Instant,
    max_requests: u32,
    window: Duration,
) -> (Decision, (Instant, u32)) {
    let (start, count) = match previous {
        Some((start, count)) if now.duration_since(start) < window => (start, count),
        _ => (now, 0),
    };

    if count >= max_requests {
        let left = window.saturating_sub(now.duration_since(start));
        let retry_after = left.as_secs().max(1);
        return (Decision::Reject { retry_after }, (start, count));
    }

    let count = count + 1;
    (
        Decision::Allow {
            remaining: max_requests - count,
        },
        (start, count),
    )
}

/// 客户端 IP，优先取连接信息，其次是转发头
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && ip.parse::<IpAddr>().is_ok()
    {
        return ip.clone();
    }

    for header in ["X-Forwarded-For", "X-Real-IP"] {
        if let Some(value) = req.headers().get(header)
            && let Ok(value) = value.to_str()
            && let Some(ip) = value.split(',').next()
            && ip.trim().parse::<IpAddr>().is_ok()
        {
            return ip.trim().to_string();
        }
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

fn extract_user_id(req: &ServiceRequest) -> Option<String> {
    req.extensions().get::<User>().map(|user| user.id.clone())
}

fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header((RETRY_AFTER, retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please try again later",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let limit = self.limit.clone();

        Box::pin(async move {
            let identity = extract_user_id(&req)
                .map(|id| format!("user:{id}"))
                .unwrap_or_else(|| format!("ip:{}", extract_client_ip(&req)));
            let cache_key = if limit.key_prefix.is_empty() {
                identity
            } else {
                format!("{}:{}", limit.key_prefix, identity)
            };

            let previous = RATE_LIMIT_CACHE.get(&cache_key).await;
            let (decision, state) = decide(
                previous,
                Instant::now(),
                limit.max_requests,
                Duration::from_secs(limit.window_secs),
            );
            RATE_LIMIT_CACHE.insert(cache_key.clone(), state).await;

            match decision {
                Decision::Reject { retry_after } => {
                    warn!(
                        "Rate limit exceeded for {} ({}/{} in {}s)",
                        cache_key, state.1, limit.max_requests, limit.window_secs
                    );
                    Ok(req.into_response(
                        create_rate_limit_response(retry_after).map_into_right_body(),
                    ))
                }
                Decision::Allow { remaining } => {
                    let mut res = srv.call(req).await?;
                    res.headers_mut().insert(
                        HeaderName::from_static("x-ratelimit-remaining"),
                        HeaderValue::from(remaining),
                    );
                    Ok(res.map_into_left_body())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{TestRequest, call_service, init_service};
    use actix_web::{App, web};

    #[test]
    fn test_presets() {
        let login = RateLimit::login();
        assert_eq!(login.max_requests, 5);
        assert_eq!(login.window_secs, 60);
        assert_eq!(login.key_prefix, "login");
        assert_eq!(RateLimit::upload().max_requests, 10);
    }

    #[test]
    fn test_window_counts_and_resets() {
        let window = Duration::from_secs(60);
        let start = Instant::now();

        let (first, state) = decide(None, start, 2, window);
        assert_eq!(first, Decision::Allow { remaining: 1 });
        let (second, state) = decide(Some(state), start, 2, window);
        assert_eq!(second, Decision::Allow { remaining: 0 });
        let (third, state) = decide(Some(state), start + Duration::from_secs(10), 2, window);
        assert_eq!(third, Decision::Reject { retry_after: 50 });

        let (after, _) = decide(Some(state), start + window, 2, window);
        assert_eq!(after, Decision::Allow { remaining: 1 });
    }

    #[actix_web::test]
    async fn test_exceeding_limit_returns_429() {
        let app = init_service(
            App::new().service(
                web::resource("/limited")
                    .wrap(RateLimit::new(1, 60).with_prefix("test-429"))
                    .route(web::get().to(HttpResponse::Ok)),
            ),
        )
        .await;

        let ok = call_service(&app, TestRequest::get().uri("/limited").to_request()).await;
        assert!(ok.status().is_success());

        let limited = call_service(&app, TestRequest::get().uri("/limited").to_request()).await;
        assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(limited.headers().contains_key(RETRY_AFTER));
    }
}
