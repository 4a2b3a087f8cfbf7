//! SeaOrmStorage 的 VisitSink 实现
//!
//! 计数是一条 `UPDATE ... SET visit_count = visit_count + 1`，
//! 并发扫码由数据库串行化，进程内不加锁。

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, ExprTrait, QueryFilter};
use tracing::trace;

use super::SeaOrmStorage;
use crate::analytics::VisitSink;

use migration::entities::qr_code;

#[async_trait]
impl VisitSink for SeaOrmStorage {
    async fn increment_visits(&self, slug: &str) -> anyhow::Result<()> {
        let result = qr_code::Entity::update_many()
            .col_expr(
                qr_code::Column::VisitCount,
                Expr::col(qr_code::Column::VisitCount).add(1i64),
            )
            .filter(qr_code::Column::Slug.eq(slug))
            .exec(&self.db)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to increment visits for '{}': {}", slug, e))?;

        if result.rows_affected == 0 {
            anyhow::bail!("No record to increment for '{}'", slug);
        }

        trace!("Visit counted for {}", slug);
        Ok(())
    }
}
