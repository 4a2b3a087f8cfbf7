//! Read-only operations for SeaOrmStorage

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::{error, trace};

use super::converters::model_to_record;
use super::{SeaOrmStorage, retry};
use crate::errors::{DynqrError, Result};
use crate::storage::{LookupResult, SlugRecord};

use migration::entities::qr_code;

/// 排序规则不区分大小写的后端可能返回大小写不同的行，这里只接受完全一致的 slug
fn exact_match(model: Option<qr_code::Model>, slug: &str) -> Option<qr_code::Model> {
    model.filter(|m| m.slug == slug)
}

impl SeaOrmStorage {
    /// 跳转路径上的查询：瞬时错误重试，最终错误折叠为 `StoreError`
    pub(super) async fn find(&self, slug: &str) -> LookupResult {
        let db = &self.db;

        let operation = format!("lookup({})", slug);
        let result = retry::with_retry(&operation, self.retry_policy, || async {
            qr_code::Entity::find_by_id(slug).one(db).await
        })
        .await;

        match result.map(|model| exact_match(model, slug)) {
            Ok(Some(model)) => {
                trace!("Slug found in {}: {}", self.backend_name, slug);
                LookupResult::Found(model_to_record(model))
            }
            Ok(None) => LookupResult::NotFound,
            Err(e) => {
                error!("Slug lookup failed after retries: {}", e);
                LookupResult::StoreError(e.to_string())
            }
        }
    }

    /// 管理端读取单条记录
    pub async fn get(&self, slug: &str) -> Result<Option<SlugRecord>> {
        let model = qr_code::Entity::find_by_id(slug)
            .one(&self.db)
            .await
            .map_err(|e| {
                DynqrError::database_operation(format!("Failed to load '{}': {}", slug, e))
            })?;
        Ok(exact_match(model, slug).map(model_to_record))
    }

    /// 按创建时间倒序列出记录，可按所有者过滤
    pub async fn list(&self, owner_id: Option<&str>) -> Result<Vec<SlugRecord>> {
        let mut query = qr_code::Entity::find().order_by_desc(qr_code::Column::CreatedAt);
        if let Some(owner) = owner_id {
            query = query.filter(qr_code::Column::OwnerId.eq(owner));
        }

        let models = query
            .all(&self.db)
            .await
            .map_err(|e| DynqrError::database_operation(format!("Failed to list slugs: {}", e)))?;
        Ok(models.into_iter().map(model_to_record).collect())
    }

    pub async fn count(&self) -> Result<u64> {
        qr_code::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DynqrError::database_operation(format!("Failed to count slugs: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model(slug: &str) -> qr_code::Model {
        qr_code::Model {
            slug: slug.to_string(),
            title: String::new(),
            redirect_url: "https://example.com/menu".to_string(),
            visit_count: 0,
            owner_id: "cafe".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_exact_match_keeps_identical_slug() {
        let found = exact_match(Some(model("abc123")), "abc123");
        assert_eq!(found.map(|m| m.slug), Some("abc123".to_string()));
    }

    #[test]
    fn test_exact_match_rejects_case_folded_row() {
        // 不区分大小写的排序规则下，查询 ABC123 会返回 abc123 这一行
        assert!(exact_match(Some(model("abc123")), "ABC123").is_none());
        assert!(exact_match(Some(model("Menu")), "menu").is_none());
        assert!(exact_match(None, "abc123").is_none());
    }
}
