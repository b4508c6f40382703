use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分页查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_size",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub size: i64,
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

// 自定义反序列化函数，支持字符串到i64的转换
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(value as i64)
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

/// 查询参数中的布尔值，接受 `true`/`false`/`1`/`0`
///
/// 与 `#[serde(flatten)]` 一起使用时查询串的值都以字符串形式到达。
pub fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(value)) => Ok(Some(value)),
        Some(BoolOrString::Str(value)) => match value.trim() {
            "" => Ok(None),
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            other => Err(D::Error::custom(format!("invalid boolean: '{other}'"))),
        },
    }
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

impl PaginationQuery {
    /// 规范化分页参数：页码至少为 1，每页条数限制在 1..=100
    pub fn normalized(&self) -> (u64, u64) {
        let page = self.page.max(1) as u64;
        let size = self.size.clamp(1, 100) as u64;
        (page, size)
    }
}

impl PaginationInfo {
    pub fn new(page: u64, size: u64, total: u64, total_pages: u64) -> Self {
        Self {
            page: page as i64,
            page_size: size as i64,
            total: total as i64,
            total_pages: total_pages as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_pagination_values() {
        let query: PaginationQuery = serde_json::from_str(r#"{"page":"3","size":"25"}"#).unwrap();
        assert_eq!(query.page, 3);
        assert_eq!(query.size, 25);
    }

    #[test]
    fn test_normalized_clamps() {
        let query = PaginationQuery { page: 0, size: 1000 };
        assert_eq!(query.normalized(), (1, 100));
        let query = PaginationQuery { page: 2, size: 0 };
        assert_eq!(query.normalized(), (2, 1));
    }

    #[test]
    fn test_optional_bool_from_query_string() {
        #[derive(Deserialize)]
        struct Params {
            #[serde(default, deserialize_with = "deserialize_optional_bool")]
            active: Option<bool>,
        }
        let params: Params = serde_json::from_str(r#"{"active":"false"}"#).unwrap();
        assert_eq!(params.active, Some(false));
        let params: Params = serde_json::from_str(r#"{"active":true}"#).unwrap();
        assert_eq!(params.active, Some(true));
        let params: Params = serde_json::from_str("{}").unwrap();
        assert_eq!(params.active, None);
        assert!(serde_json::from_str::<Params>(r#"{"active":"maybe"}"#).is_err());
    }

    #[test]
    fn test_pagination_info_is_camel_case() {
        let info = PaginationInfo::new(1, 10, 42, 5);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["totalPages"], 5);
    }
}
