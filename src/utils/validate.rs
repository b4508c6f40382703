use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("Invalid phone regex"));

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("Invalid time regex"));

/// 邮箱格式
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// 10 位数字电话号码
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// 24 小时制 `HH:mm`
pub fn is_valid_time(time: &str) -> bool {
    TIME_RE.is_match(time)
}

/// 资源 ID（UUID 字符串）
pub fn is_valid_id(id: &str) -> bool {
    uuid::Uuid::parse_str(id).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("asha.rao@example.com"));
        assert!(is_valid_email("parent+1@school.co.in"));
        assert!(!is_valid_email("missing-at.example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone() {
        assert!(is_valid_phone("9876543210"));
        assert!(!is_valid_phone("987654321"));
        assert!(!is_valid_phone("98765432100"));
        assert!(!is_valid_phone("98765-4321"));
    }

    #[test]
    fn test_time() {
        assert!(is_valid_time("09:30"));
        assert!(is_valid_time("23:59"));
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("9:30"));
        assert!(!is_valid_time("09:60"));
    }

    #[test]
    fn test_id() {
        assert!(is_valid_id("0b6f1c5e-6a4d-4c55-9a8e-3c2f1f0e7d11"));
        assert!(!is_valid_id("not-an-id"));
        assert!(!is_valid_id("12"));
    }
}
