//! Write operations for SeaOrmStorage

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, SqlErr};
use tracing::info;

use super::SeaOrmStorage;
use super::converters::{model_to_record, new_record_to_active_model};
use crate::errors::{DynqrError, Result};
use crate::storage::{NewSlugRecord, SlugRecord};

use migration::entities::qr_code;

impl SeaOrmStorage {
    /// 插入新记录；slug 已存在时返回 `Conflict`
    pub async fn insert(&self, record: NewSlugRecord) -> Result<SlugRecord> {
        let created_at = Utc::now();
        let active_model = new_record_to_active_model(&record, created_at);

        qr_code::Entity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    DynqrError::conflict(format!("Slug '{}' already exists", record.slug))
                }
                _ => DynqrError::database_operation(format!(
                    "Failed to insert slug '{}': {}",
                    record.slug, e
                )),
            })?;

        info!("Slug created: {} -> {}", record.slug, record.redirect_url);
        Ok(model_to_record(qr_code::Model {
            slug: record.slug,
            title: record.title,
            redirect_url: record.redirect_url,
            visit_count: 0,
            owner_id: record.owner_id,
            created_at,
        }))
    }

    /// 修改跳转目标（slug 本身不可变）
    pub async fn update_redirect_url(&self, slug: &str, redirect_url: &str) -> Result<()> {
        let result = qr_code::Entity::update_many()
            .col_expr(qr_code::Column::RedirectUrl, Expr::value(redirect_url))
            .filter(qr_code::Column::Slug.eq(slug))
            .exec(&self.db)
            .await
            .map_err(|e| {
                DynqrError::database_operation(format!("Failed to update slug '{}': {}", slug, e))
            })?;

        if result.rows_affected == 0 {
            return Err(DynqrError::not_found(format!("Slug '{}' does not exist", slug)));
        }

        info!("Slug updated: {} -> {}", slug, redirect_url);
        Ok(())
    }
}
