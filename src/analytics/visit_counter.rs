//! 访问计数分发器
//!
//! 每次扫码只调用一次 [`VisitCounter::record`]：
//! - 自增在独立任务中执行，不阻塞跳转响应
//! - 失败只记录日志，不重试
//! - 记录在途任务数，关闭时可等待其完成

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::runtime::Handle;
use tokio::sync::Notify;
use tracing::{trace, warn};

use super::VisitSink;

/// 在途自增任务计数
#[derive(Default)]
struct InFlight {
    count: AtomicUsize,
    idle: Notify,
}

/// 任务结束（包括被取消）时自动减少在途计数
struct InFlightGuard(Arc<InFlight>);

impl InFlightGuard {
    fn enter(in_flight: &Arc<InFlight>) -> Self {
        in_flight.count.fetch_add(1, Ordering::AcqRel);
        Self(Arc::clone(in_flight))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.0.count.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.0.idle.notify_waiters();
        }
    }
}

/// 访问计数器
///
/// 无可变共享状态：计数的并发控制完全交给 sink 背后的存储。
#[derive(Clone)]
pub struct VisitCounter {
    sink: Option<Arc<dyn VisitSink>>,
    /// 创建时所在的运行时；自增任务固定在这里执行，
    /// 避免 HTTP worker 退出时任务被一起丢弃
    runtime: Option<Handle>,
    in_flight: Arc<InFlight>,
}

impl VisitCounter {
    pub fn new(sink: Arc<dyn VisitSink>) -> Self {
        Self {
            sink: Some(sink),
            runtime: Handle::try_current().ok(),
            in_flight: Arc::new(InFlight::default()),
        }
    }

    /// 不计数
    pub fn disabled() -> Self {
        Self {
            sink: None,
            runtime: None,
            in_flight: Arc::new(InFlight::default()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// 发起一次 fire-and-forget 自增
    pub fn record(&self, slug: &str) {
        let Some(sink) = &self.sink else {
            return;
        };

        let Some(runtime) = self.runtime.clone().or_else(|| Handle::try_current().ok()) else {
            warn!("No async runtime available, visit for {} not counted", slug);
            return;
        };

        let sink = Arc::clone(sink);
        let slug = slug.to_string();
        let guard = InFlightGuard::enter(&self.in_flight);

        runtime.spawn(async move {
            let _guard = guard;
            match sink.increment_visits(&slug).await {
                Ok(()) => trace!("Visit recorded for {}", slug),
                Err(e) => warn!("Visit for {} not counted: {}", slug, e),
            }
        });
    }

    /// 当前在途的自增任务数
    pub fn in_flight(&self) -> usize {
        self.in_flight.count.load(Ordering::Acquire)
    }

    /// 等待所有在途自增完成
    pub async fn drain(&self) {
        loop {
            let notified = self.in_flight.idle.notified();
            if self.in_flight() == 0 {
                return;
            }
            notified.await;
        }
    }
}
