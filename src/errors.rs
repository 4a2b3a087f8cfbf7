use std::fmt;

#[derive(Debug, Clone)]
pub enum DynqrError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Config(String),
    Validation(String),
    NotFound(String),
    Conflict(String),
    FileOperation(String),
    Serialization(String),
}

impl DynqrError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            DynqrError::DatabaseConfig(_) => "E001",
            DynqrError::DatabaseConnection(_) => "E002",
            DynqrError::DatabaseOperation(_) => "E003",
            DynqrError::Config(_) => "E004",
            DynqrError::Validation(_) => "E005",
            DynqrError::NotFound(_) => "E006",
            DynqrError::Conflict(_) => "E007",
            DynqrError::FileOperation(_) => "E008",
            DynqrError::Serialization(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            DynqrError::DatabaseConfig(_) => "Database Configuration Error",
            DynqrError::DatabaseConnection(_) => "Database Connection Error",
            DynqrError::DatabaseOperation(_) => "Database Operation Error",
            DynqrError::Config(_) => "Configuration Error",
            DynqrError::Validation(_) => "Validation Error",
            DynqrError::NotFound(_) => "Resource Not Found",
            DynqrError::Conflict(_) => "Resource Conflict",
            DynqrError::FileOperation(_) => "File Operation Error",
            DynqrError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            DynqrError::DatabaseConfig(msg)
            | DynqrError::DatabaseConnection(msg)
            | DynqrError::DatabaseOperation(msg)
            | DynqrError::Config(msg)
            | DynqrError::Validation(msg)
            | DynqrError::NotFound(msg)
            | DynqrError::Conflict(msg)
            | DynqrError::FileOperation(msg)
            | DynqrError::Serialization(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for DynqrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for DynqrError {}

// 便捷的构造函数
impl DynqrError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        DynqrError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        DynqrError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        DynqrError::DatabaseOperation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        DynqrError::Config(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        DynqrError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        DynqrError::NotFound(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        DynqrError::Conflict(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        DynqrError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        DynqrError::Serialization(msg.into())
    }
}

impl From<sea_orm::DbErr> for DynqrError {
    fn from(err: sea_orm::DbErr) -> Self {
        DynqrError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for DynqrError {
    fn from(err: std::io::Error) -> Self {
        DynqrError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for DynqrError {
    fn from(err: serde_json::Error) -> Self {
        DynqrError::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for DynqrError {
    fn from(err: url::ParseError) -> Self {
        DynqrError::Validation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DynqrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let all = [
            DynqrError::database_config("x"),
            DynqrError::database_connection("x"),
            DynqrError::database_operation("x"),
            DynqrError::config("x"),
            DynqrError::validation("x"),
            DynqrError::not_found("x"),
            DynqrError::conflict("x"),
            DynqrError::file_operation("x"),
            DynqrError::serialization("x"),
        ];
        let mut codes: Vec<&str> = all.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_display_uses_simple_format() {
        let err = DynqrError::not_found("slug 'abc' does not exist");
        assert_eq!(
            err.to_string(),
            "Resource Not Found: slug 'abc' does not exist"
        );
        assert_eq!(err.message(), "slug 'abc' does not exist");
    }

    #[test]
    fn test_from_url_parse_error() {
        let err: DynqrError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, DynqrError::Validation(_)));
    }

    #[test]
    fn test_colored_format_contains_code() {
        let err = DynqrError::conflict("slug taken");
        let out = err.format_colored();
        assert!(out.contains("E007"));
        assert!(out.contains("slug taken"));
    }
}
