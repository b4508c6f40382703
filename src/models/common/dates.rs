//! 日期解析辅助
//!
//! 前端既可能发送 `2024-01-10`，也可能发送 `2024-01-10T00:00:00.000Z`，
//! 两种格式都只取日期部分。

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// 解析 ISO 日期（允许带时间部分）
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.get(..10)?;
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    if value.len() > 10 {
        // 带时间部分时必须是合法的 RFC 3339 或 `T` 分隔的本地时间
        let rest = &value[10..];
        if !rest.starts_with('T') && !rest.starts_with(' ') {
            return None;
        }
    }
    Some(date)
}

/// 将数据库中的日期字符串转换为 NaiveDate
pub fn date_from_db(value: &str) -> NaiveDate {
    parse_date(value).unwrap_or_default()
}

/// 将 NaiveDate 转换为数据库存储格式
pub fn date_to_db(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: '{raw}'")))
}

pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    // 空字符串视为未提供
    match Option::<String>::deserialize(deserializer)?.filter(|raw| !raw.trim().is_empty()) {
        Some(raw) => parse_date(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: '{raw}'"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_timestamp() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(parse_date("2024-01-10"), Some(expected));
        assert_eq!(parse_date("2024-01-10T00:00:00.000Z"), Some(expected));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("10/01/2024"), None);
        assert_eq!(parse_date("2024-01-10garbage"), None);
        assert_eq!(parse_date(""), None);
    }
}
