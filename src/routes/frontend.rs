//! 管理后台前端资源
//!
//! 构建产物通过 rust-embed 编译进二进制。未命中的页面路由回落到
//! `index.html` 交给前端路由处理，未注册的 `/api` 路径返回 JSON 404。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::borrow::Cow;
use std::path::Path;

use crate::models::{ApiResponse, ErrorCode};

#[derive(Embed)]
#[folder = "frontend/dist/"]
struct FrontendAssets;

const INDEX: &str = "index.html";

fn extension(path: &str) -> &str {
    Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
}

fn mime_type(path: &str) -> &'static str {
    match extension(path) {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" | "map" => "application/json; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// 带内容哈希的构建产物可长期缓存，入口页不缓存
fn cache_control(path: &str) -> &'static str {
    let hashed = path.starts_with("assets/")
        && matches!(
            extension(path),
            "js" | "css" | "woff" | "woff2" | "ttf" | "png" | "jpg" | "jpeg" | "svg" | "webp"
        );
    if hashed {
        "public, max-age=31536000, immutable"
    } else {
        "no-cache"
    }
}

/// 解析请求路径对应的资源，未命中时回落到入口页
fn resolve(path: &str) -> Option<(Cow<'static, [u8]>, String)> {
    let path = path.trim_start_matches('/');
    if !path.is_empty()
        && let Some(file) = FrontendAssets::get(path)
    {
        return Some((file.data, path.to_string()));
    }
    FrontendAssets::get(INDEX).map(|file| (file.data, INDEX.to_string()))
}

pub async fn serve_frontend(req: HttpRequest) -> ActixResult<HttpResponse> {
    let tail = req.match_info().query("tail");

    if tail == "api" || tail.starts_with("api/") {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            format!("No route for {} {}", req.method(), req.path()),
        )));
    }

    match resolve(tail) {
        Some((data, path)) => Ok(HttpResponse::Ok()
            .content_type(mime_type(&path))
            .insert_header(("Cache-Control", cache_control(&path)))
            .body(data.into_owned())),
        None => Ok(HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(
                r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Tuition Center</title></head>
<body>
    <h1>Frontend Not Found</h1>
    <p>Build the admin frontend first: <code>cd frontend && npm run build</code></p>
</body>
</html>"#,
            )),
    }
}

/// 必须最后注册，兜住所有未匹配的 GET 请求
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{tail:.*}", web::get().to(serve_frontend));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{TestRequest, call_service, init_service, read_body_json};
    use actix_web::{App, http::StatusCode};

    #[test]
    fn test_mime_type() {
        assert_eq!(mime_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(
            mime_type("assets/app.mjs"),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(mime_type("logo.png"), "image/png");
        assert_eq!(mime_type("blob.xyz"), "application/octet-stream");
    }

    #[test]
    fn test_only_hashed_assets_are_cached() {
        assert_eq!(
            cache_control("assets/index-3f2a.js"),
            "public, max-age=31536000, immutable"
        );
        assert_eq!(cache_control("index.html"), "no-cache");
        assert_eq!(cache_control("favicon.png"), "no-cache");
    }

    #[actix_web::test]
    async fn test_unknown_api_path_is_json_404() {
        let app = init_service(App::new().configure(configure_frontend_routes)).await;
        let resp = call_service(&app, TestRequest::get().uri("/api/nothing").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::NotFound.as_i32());
    }
}
