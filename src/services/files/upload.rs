use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File, path::Path};
use tracing::{error, info};
use uuid::Uuid;

use super::FileService;
use crate::config::AppConfig;
use crate::errors::TuitionError;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, files::responses::FileUploadResponse};
use crate::utils::sniff_content_type;

/// 取出小写扩展名，带前导点
pub(crate) fn file_extension(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

fn bad_request(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

fn upload_failed(err: TuitionError, message: &str) -> HttpResponse {
    error!("{}", err);
    HttpResponse::InternalServerError()
        .json(ApiResponse::error_empty(ErrorCode::FileUploadFailed, message))
}

pub async fn handle_upload(
    service: &FileService,
    req: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let upload_dir = &config.upload.dir;
    let max_size = config.upload.max_size;
    let allowed_types = &config.upload.allowed_types;

    let user_id = match RequireJWT::extract_user_id(req) {
        Some(id) => id,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                    ErrorCode::Unauthorized,
                    "Not logged in",
                )),
            );
        }
    };

    // 确保上传目录存在
    if !Path::new(upload_dir).exists()
        && let Err(e) = fs::create_dir_all(upload_dir)
    {
        return Ok(upload_failed(
            TuitionError::file_operation(format!("{e}")),
            "Failed to create upload directory",
        ));
    }

    let mut original_name = String::new();
    let mut file_size: i64 = 0;
    let mut file_uploaded = false;
    let mut content_type = "";
    let mut stored_name = String::new();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name != "file" {
            continue;
        }
        if file_uploaded {
            return Ok(bad_request(
                ErrorCode::MultifileUploadNotAllowed,
                "Only one file can be uploaded at a time",
            ));
        }
        file_uploaded = true;

        original_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string())
            .unwrap_or_default();

        let extension = file_extension(&original_name);
        if extension.is_empty() || !allowed_types.iter().any(|t| t.to_lowercase() == extension) {
            return Ok(bad_request(
                ErrorCode::FileTypeNotAllowed,
                "File type not allowed",
            ));
        }

        stored_name = format!("{}{}", Uuid::new_v4(), extension);
        let file_path = Path::new(upload_dir).join(&stored_name);
        let mut f = match File::create(&file_path) {
            Ok(file) => file,
            Err(e) => {
                return Ok(upload_failed(
                    TuitionError::file_operation(format!("{e}")),
                    "Failed to create file",
                ));
            }
        };

        let mut total_size: usize = 0;
        let mut first_chunk = true;
        while let Some(chunk) = field.next().await {
            let data = chunk?;

            // 第一个 chunk 时按魔术字节识别内容
            if first_chunk {
                first_chunk = false;
                match sniff_content_type(&data, &extension) {
                    Some(sniffed) => content_type = sniffed,
                    None => {
                        let _ = fs::remove_file(&file_path);
                        return Ok(bad_request(
                            ErrorCode::FileTypeNotAllowed,
                            "File content does not match its extension",
                        ));
                    }
                }
            }

            total_size += data.len();
            if total_size > max_size {
                let _ = fs::remove_file(&file_path);
                return Ok(bad_request(
                    ErrorCode::FileSizeExceeded,
                    "File size exceeds the limit",
                ));
            }
            if let Err(e) = f.write_all(&data) {
                let _ = fs::remove_file(&file_path);
                return Ok(upload_failed(e.into(), "Failed to write file"));
            }
        }

        // 空文件没有可识别的内容
        if first_chunk {
            let _ = fs::remove_file(&file_path);
            return Ok(bad_request(ErrorCode::BadRequest, "Uploaded file is empty"));
        }
        file_size = total_size as i64;
    }

    if !file_uploaded {
        return Ok(bad_request(
            ErrorCode::FileNotFound,
            "No file found in upload payload",
        ));
    }

    let storage = service.get_storage(req);

    match storage
        .create_file(
            &original_name,
            &stored_name,
            file_size,
            content_type,
            &user_id,
        )
        .await
    {
        Ok(file) => {
            info!(
                "File {} uploaded by {}: {} ({} bytes)",
                file.id, user_id, file.original_name, file.file_size
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                FileUploadResponse::from(file),
                "File uploaded successfully",
            )))
        }
        Err(e) => {
            let _ = fs::remove_file(Path::new(upload_dir).join(&stored_name));
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::FileUploadFailed,
                    format!("Failed to upload file: {e}"),
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("Report.PDF"), ".pdf");
        assert_eq!(file_extension("marks.sheet.xlsx"), ".xlsx");
        assert_eq!(file_extension("README"), "");
    }
}
