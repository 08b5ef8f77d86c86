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
macro_rules! define_course_api_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum CourseApiError {
            $($variant(String),)*
        }

        impl CourseApiError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CourseApiError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CourseApiError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CourseApiError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CourseApiError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CourseApiError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_course_api_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Conflict("E006", "Resource Conflict"),
    Io("E007", "IO Error"),
    Serialization("E008", "Serialization Error"),
}

impl CourseApiError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CourseApiError::NotFound(_))
    }
}

impl fmt::Display for CourseApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CourseApiError {}

impl From<sea_orm::DbErr> for CourseApiError {
    fn from(err: sea_orm::DbErr) -> Self {
        CourseApiError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for CourseApiError {
    fn from(err: std::io::Error) -> Self {
        CourseApiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CourseApiError {
    fn from(err: serde_json::Error) -> Self {
        CourseApiError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CourseApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CourseApiError::database_config("test").code(), "E001");
        assert_eq!(CourseApiError::database_operation("test").code(), "E003");
        assert_eq!(CourseApiError::not_found("test").code(), "E005");
        assert_eq!(CourseApiError::conflict("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CourseApiError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            CourseApiError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = CourseApiError::not_found("Course 42 not found");
        let formatted = err.to_string();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Course 42 not found"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_db_err_conversion() {
        let err: CourseApiError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_io_and_json_conversion() {
        let err: CourseApiError = std::io::Error::other("disk").into();
        assert_eq!(err.code(), "E007");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CourseApiError = json_err.into();
        assert_eq!(err.code(), "E008");
    }
}
