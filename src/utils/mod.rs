pub mod url_validator;

pub use url_validator::{UrlValidationError, parse_redirect_target, validate_url};

/// 自动生成的 slug 长度
pub const GENERATED_SLUG_LENGTH: usize = 6;

/// 管理端允许的最大 slug 长度
pub const MAX_SLUG_LENGTH: usize = 64;

/// 跳转端接受的最大 slug 字节数，超过直接回退，不查询存储
pub const MAX_RESOLVABLE_SLUG_BYTES: usize = 255;

/// 生成随机 slug（小写字母 + 数字，即 base36）
pub fn generate_random_slug(length: usize) -> String {
    use std::iter;

    let chars = b"abcdefghijklmnopqrstuvwxyz0123456789";

    iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
        .take(length)
        .collect()
}

/// 管理端创建 slug 时的格式校验：1-64 位 `[A-Za-z0-9_-]`
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LENGTH
        && slug
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// 跳转端的宽松校验：非空且不超长即可交给存储查询
#[inline]
pub fn is_resolvable_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.len() <= MAX_RESOLVABLE_SLUG_BYTES
}
