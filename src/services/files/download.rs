use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::FileService;
use crate::config::AppConfig;
use crate::errors::TuitionError;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error;

/// 响应头中的文件名去掉引号和换行
fn header_safe_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '"' | '\\' | '\r' | '\n'))
        .collect()
}

pub async fn handle_download(
    service: &FileService,
    request: &HttpRequest,
    file_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let db_file = match storage.get_file_by_id(&file_id).await {
        Ok(Some(f)) => f,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "File not found",
            )));
        }
        Err(e) => return Ok(storage_error("File query failed", e)),
    };

    let config = AppConfig::get();
    let file_path = Path::new(&config.upload.dir).join(&db_file.stored_name);

    if !file_path.exists() {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "File content is missing",
        )));
    }

    let mut buf = Vec::new();
    if let Err(e) = File::open(&file_path).and_then(|mut file| file.read_to_end(&mut buf)) {
        tracing::error!("{}", TuitionError::from(e));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "File read failed",
            )),
        );
    }

    // 使用上传时的原始文件名
    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, db_file.content_type.as_str()))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{}\"",
                header_safe_name(&db_file.original_name)
            ),
        ))
        .body(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_safe_name() {
        assert_eq!(header_safe_name("fee \"receipt\".pdf"), "fee receipt.pdf");
        assert_eq!(header_safe_name("a\r\nb.txt"), "ab.txt");
    }
}
