//! URL 验证模块
//!
//! 跳转目标在解析时（而不是创建时）校验：只允许格式正确的绝对 URI
//! 或以单个 `/` 开头的请求相对路径，并阻止危险协议。

use std::borrow::Cow;

use url::{ParseError, Position, Url};

/// URL 验证错误
#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    ForbiddenCharacter,
    DangerousProtocol(String),
    NetworkPathReference,
    NotRequestRelative,
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::ForbiddenCharacter => {
                write!(f, "URL contains whitespace or control characters")
            }
            Self::DangerousProtocol(proto) => {
                write!(f, "Dangerous protocol blocked: {}:", proto)
            }
            Self::NetworkPathReference => {
                write!(f, "Network-path references ('//host') are not allowed")
            }
            Self::NotRequestRelative => write!(
                f,
                "URL has no scheme and does not start with '/'"
            ),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 危险协议列表
const DANGEROUS_SCHEMES: &[&str] = &["javascript", "data", "file", "vbscript", "about", "blob"];

/// WHATWG 特殊协议，`url` 会宽松解析它们的变形写法
const SPECIAL_SCHEMES: &[&str] = &["http", "https", "ws", "wss", "ftp"];

/// 解析相对路径时使用的占位基址
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// 验证跳转目标并返回可直接写入 `Location` 头的值
///
/// 可见 ASCII 的目标原样返回；含非 ASCII 字符时返回百分号编码后的规范形式。
pub fn parse_redirect_target(raw: &str) -> Result<Cow<'_, str>, UrlValidationError> {
    if raw.trim().is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    if raw
        .chars()
        .any(|c| c.is_ascii_whitespace() || c.is_control())
    {
        return Err(UrlValidationError::ForbiddenCharacter);
    }

    if raw.starts_with('/') {
        return parse_relative(raw);
    }

    let url = Url::parse(raw).map_err(|e| match e {
        ParseError::RelativeUrlWithoutBase => UrlValidationError::NotRequestRelative,
        other => UrlValidationError::InvalidFormat(other.to_string()),
    })?;

    // Url::scheme() 总是小写
    if DANGEROUS_SCHEMES.contains(&url.scheme()) {
        return Err(UrlValidationError::DangerousProtocol(url.scheme().to_string()));
    }

    if raw.is_ascii() && !is_ambiguous_special(raw, url.scheme()) {
        Ok(Cow::Borrowed(raw))
    } else {
        Ok(Cow::Owned(url.into()))
    }
}

/// 特殊协议缺少 `://` 或含反斜杠时，浏览器会把原文当作相对路径
fn is_ambiguous_special(raw: &str, scheme: &str) -> bool {
    if !SPECIAL_SCHEMES.contains(&scheme) {
        return false;
    }
    let rest = raw.get(scheme.len()..).unwrap_or_default();
    !rest.starts_with("://") || raw.contains('\\')
}

fn parse_relative(raw: &str) -> Result<Cow<'_, str>, UrlValidationError> {
    if raw.starts_with("//") || raw.starts_with("/\\") {
        return Err(UrlValidationError::NetworkPathReference);
    }

    let base =
        Url::parse(RELATIVE_BASE).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;
    let joined = base
        .join(raw)
        .map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if raw.is_ascii() {
        Ok(Cow::Borrowed(raw))
    } else {
        Ok(Cow::Owned(joined[Position::BeforePath..].to_string()))
    }
}

/// 验证 URL 是否可作为跳转目标
pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    parse_redirect_target(url).map(|_| ())
}

/// 获取 URL 验证错误的用户友好消息
pub fn validation_error_message(error: &UrlValidationError) -> &'static str {
    match error {
        UrlValidationError::EmptyUrl => "URL cannot be empty",
        UrlValidationError::ForbiddenCharacter => "URL must not contain spaces",
        UrlValidationError::DangerousProtocol(_) => "This URL protocol is not allowed",
        UrlValidationError::NetworkPathReference | UrlValidationError::NotRequestRelative => {
            "URL must be absolute (https://...) or start with a single '/'"
        }
        UrlValidationError::InvalidFormat(_) => "Invalid URL format",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_absolute_urls_are_returned_verbatim() {
        for url in [
            "http://example.com",
            "https://example.com/menu",
            "https://example.com/path?query=1#frag",
            "http://localhost:8080",
            "HTTPS://Example.com/Menu",
            "tel:+15551234567",
            "mailto:owner@example.com",
        ] {
            assert_eq!(parse_redirect_target(url).unwrap(), Cow::Borrowed(url));
        }
    }

    #[test]
    fn test_loose_special_scheme_forms_are_normalized() {
        assert_eq!(
            parse_redirect_target("http:example.com").unwrap(),
            "http://example.com/"
        );
        assert_eq!(
            parse_redirect_target("https:/example.com/menu").unwrap(),
            "https://example.com/menu"
        );
        assert_eq!(
            parse_redirect_target("https:\\\\example.com").unwrap(),
            "https://example.com/"
        );
        assert_eq!(
            parse_redirect_target("https://example.com\\menu").unwrap(),
            "https://example.com/menu"
        );
    }

    #[test]
    fn test_relative_paths() {
        assert_eq!(parse_redirect_target("/menu").unwrap(), "/menu");
        assert_eq!(parse_redirect_target("/a/b?c=d").unwrap(), "/a/b?c=d");
        assert_eq!(
            parse_redirect_target("//evil.example"),
            Err(UrlValidationError::NetworkPathReference)
        );
        assert_eq!(
            parse_redirect_target("/\\evil.example"),
            Err(UrlValidationError::NetworkPathReference)
        );
    }

    #[test]
    fn test_not_a_url() {
        assert_eq!(
            parse_redirect_target("not a url"),
            Err(UrlValidationError::ForbiddenCharacter)
        );
        assert_eq!(
            parse_redirect_target("example.com/menu"),
            Err(UrlValidationError::NotRequestRelative)
        );
        assert!(matches!(
            parse_redirect_target("https://"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_dangerous_protocols() {
        for url in [
            "javascript:alert(1)",
            "JAVASCRIPT:alert(1)",
            "data:text/html,<script>alert(1)</script>",
            "file:///etc/passwd",
            "vbscript:msgbox(1)",
        ] {
            assert!(matches!(
                parse_redirect_target(url),
                Err(UrlValidationError::DangerousProtocol(_))
            ));
        }
    }

    #[test]
    fn test_empty_and_control_characters() {
        assert_eq!(parse_redirect_target(""), Err(UrlValidationError::EmptyUrl));
        assert_eq!(parse_redirect_target("   "), Err(UrlValidationError::EmptyUrl));
        assert_eq!(
            parse_redirect_target("https://example.com/\r\nSet-Cookie: x=1"),
            Err(UrlValidationError::ForbiddenCharacter)
        );
        assert_eq!(
            parse_redirect_target(" https://example.com"),
            Err(UrlValidationError::ForbiddenCharacter)
        );
    }

    #[test]
    fn test_non_ascii_is_percent_encoded() {
        assert_eq!(
            parse_redirect_target("https://example.com/café").unwrap(),
            "https://example.com/caf%C3%A9"
        );
        assert_eq!(parse_redirect_target("/menü").unwrap(), "/men%C3%BC");
    }

    #[test]
    fn test_validate_url_and_message() {
        assert!(validate_url("https://example.com").is_ok());
        let err = validate_url("ftp//broken").unwrap_err();
        assert_eq!(
            validation_error_message(&err),
            "URL must be absolute (https://...) or start with a single '/'"
        );
    }
}
