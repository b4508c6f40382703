//! 上传文件的内容嗅探

const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
const ZIP: &[u8] = &[0x50, 0x4B, 0x03, 0x04];

/// 根据扩展名与文件头确定 MIME 类型
///
/// `extension` 包含点号，如 `.png`，大小写不敏感。
/// 文件头与扩展名不符、或扩展名未知时返回 `None`。
pub fn sniff_content_type(data: &[u8], extension: &str) -> Option<&'static str> {
    if data.is_empty() {
        return None;
    }

    match extension.to_ascii_lowercase().as_str() {
        ".png" if data.starts_with(PNG) => Some("image/png"),
        ".jpg" | ".jpeg" if data.starts_with(JPEG) => Some("image/jpeg"),
        ".pdf" if data.starts_with(b"%PDF") => Some("application/pdf"),
        // OOXML 文档本质上是 zip 包
        ".docx" if data.starts_with(ZIP) => {
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        }
        ".xlsx" if data.starts_with(ZIP) => {
            Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
        }
        ".csv" if is_text(data) => Some("text/csv"),
        ".txt" if is_text(data) => Some("text/plain"),
        _ => None,
    }
}

/// 文本文件不能包含 NUL 字节
fn is_text(data: &[u8]) -> bool {
    !data.contains(&0)
}

/// 文件头是否与扩展名匹配
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    sniff_content_type(data, extension).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_magic() {
        assert_eq!(sniff_content_type(PNG, ".PNG"), Some("image/png"));
        assert!(!validate_magic_bytes(PNG, ".jpg"));
    }

    #[test]
    fn test_pdf_disguised_as_docx() {
        assert!(validate_magic_bytes(b"%PDF-1.7", ".pdf"));
        assert!(!validate_magic_bytes(b"%PDF-1.7", ".docx"));
    }

    #[test]
    fn test_text_files() {
        assert_eq!(sniff_content_type(b"name,phone\n", ".csv"), Some("text/csv"));
        assert!(!validate_magic_bytes(&[0x00, 0x01], ".txt"));
    }

    #[test]
    fn test_unknown_extension_and_empty_data() {
        assert!(!validate_magic_bytes(b"MZ", ".exe"));
        assert!(!validate_magic_bytes(&[], ".png"));
    }
}
