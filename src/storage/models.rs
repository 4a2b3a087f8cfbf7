use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 一条二维码跳转记录
///
/// `slug` 全局唯一且创建后不可变；`visit_count` 只增不减；
/// `redirect_url` 可被所有者随时修改，跳转时总是读取最新值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugRecord {
    pub slug: String,
    pub title: String,
    pub redirect_url: String,
    #[serde(default)]
    pub visit_count: u64,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

/// 创建记录所需的字段
#[derive(Debug, Clone)]
pub struct NewSlugRecord {
    pub slug: String,
    pub title: String,
    pub redirect_url: String,
    pub owner_id: String,
}

/// 存储查询结果
///
/// 跳转端对三种情况一视同仁：除 `Found` 外全部回退。
#[derive(Debug, Clone)]
pub enum LookupResult {
    Found(SlugRecord),
    NotFound,
    StoreError(String),
}

