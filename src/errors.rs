//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

use sea_orm::SqlErr;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_tuition_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum TuitionError {
            $($variant(String),)*
        }

        impl TuitionError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(TuitionError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TuitionError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(TuitionError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl TuitionError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TuitionError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_tuition_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    Conflict("E010", "Conflict"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
    Reference("E014", "Reference Constraint Error"),
}

impl TuitionError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 将数据库错误转换为带上下文的业务错误
    ///
    /// 唯一约束冲突映射为 `Conflict`，外键约束冲突映射为 `Reference`。
    pub fn from_db(context: &str, err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                TuitionError::conflict(format!("{context}: {detail}"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                TuitionError::reference(format!("{context}: {detail}"))
            }
            _ => TuitionError::database_operation(format!("{context}: {err}")),
        }
    }
}

impl fmt::Display for TuitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TuitionError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for TuitionError {
    fn from(err: sea_orm::DbErr) -> Self {
        TuitionError::from_db("Database error", err)
    }
}

impl From<std::io::Error> for TuitionError {
    fn from(err: std::io::Error) -> Self {
        TuitionError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TuitionError {
    fn from(err: serde_json::Error) -> Self {
        TuitionError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for TuitionError {
    fn from(err: chrono::ParseError) -> Self {
        TuitionError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TuitionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TuitionError::cache_connection("test").code(), "E001");
        assert_eq!(TuitionError::database_config("test").code(), "E003");
        assert_eq!(TuitionError::validation("test").code(), "E007");
        assert_eq!(TuitionError::conflict("test").code(), "E010");
        assert_eq!(TuitionError::reference("test").code(), "E014");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            TuitionError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            TuitionError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = TuitionError::conflict("Email already exists");
        let formatted = err.format_simple();
        assert!(formatted.contains("Conflict"));
        assert!(formatted.contains("Email already exists"));
    }

    #[test]
    fn test_plain_db_error_is_database_operation() {
        let err = TuitionError::from_db("Query failed", sea_orm::DbErr::Custom("boom".into()));
        assert_eq!(err.code(), "E005");
        assert!(err.message().starts_with("Query failed"));
    }
}
