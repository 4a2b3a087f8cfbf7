/// 访问计数 Sink
///
/// 实现必须在存储端原子地执行 `visit_count + 1`，不允许先读后写。
#[async_trait::async_trait]
pub trait VisitSink: Send + Sync {
    async fn increment_visits(&self, slug: &str) -> anyhow::Result<()>;
}
