//! Slug 存储
//!
//! 跳转端只依赖 [`SlugStore`]（查询）与 [`crate::analytics::VisitSink`]
//! （原子自增）两个 trait；[`SeaOrmStorage`] 同时实现两者。

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod models;

pub use backend::SeaOrmStorage;
pub use models::{LookupResult, NewSlugRecord, SlugRecord};

/// 按 slug 的键值查询
#[async_trait]
pub trait SlugStore: Send + Sync {
    /// 精确、区分大小写地查找 slug
    async fn lookup(&self, slug: &str) -> LookupResult;

    /// 存储连通性检查
    async fn ping(&self) -> Result<()>;

    fn backend_name(&self) -> &str;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<SeaOrmStorage>> {
        let database_url = &config.database_url;

        // 从 URL 自动推断数据库类型
        let backend_type = backend::infer_backend_from_url(database_url)?;

        let storage = SeaOrmStorage::new(database_url, &backend_type, config).await?;
        Ok(Arc::new(storage))
    }
}
