//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_unisystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum UniSystemError {
            $($variant(String),)*
        }

        impl UniSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(UniSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(UniSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(UniSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl UniSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        UniSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_unisystem_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    DateParse("E007", "Date Parse Error"),
    Authentication("E008", "Authentication Error"),
    Authorization("E009", "Authorization Error"),
}

impl UniSystemError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for UniSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for UniSystemError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for UniSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        UniSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for UniSystemError {
    fn from(err: serde_json::Error) -> Self {
        UniSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for UniSystemError {
    fn from(err: chrono::ParseError) -> Self {
        UniSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UniSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(UniSystemError::database_config("test").code(), "E001");
        assert_eq!(UniSystemError::validation("test").code(), "E004");
        assert_eq!(UniSystemError::authentication("test").code(), "E008");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            UniSystemError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            UniSystemError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = UniSystemError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = UniSystemError::not_found("No such course");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("No such course"));
    }
}
