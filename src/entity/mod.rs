//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod announcements;
pub mod batch_students;
pub mod batches;
pub mod files;
pub mod payments;
pub mod staff;
pub mod standards;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};

/// Unix 秒转换为 UTC 时间
pub(crate) fn timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_default()
}

/// 解析以 JSON 文本存储的列表列，损坏的数据按空列表处理
pub(crate) fn decode_list<T: DeserializeOwned>(raw: &str) -> Vec<T> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub(crate) fn encode_list<T: Serialize>(items: &[T]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_column_round_trip() {
        let encoded = encode_list(&["a".to_string(), "b".to_string()]);
        assert_eq!(encoded, r#"["a","b"]"#);
        assert_eq!(decode_list::<String>(&encoded), vec!["a", "b"]);
    }

    #[test]
    fn test_corrupt_list_column_is_empty() {
        assert!(decode_list::<String>("not json").is_empty());
    }
}
