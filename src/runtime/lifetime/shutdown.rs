use std::time::Duration;
use tokio::signal;
use tokio::time::timeout;
use tracing::{error, info};

use crate::analytics::VisitCounter;

/// 等待在途访问计数的最长时间（秒）
const DRAIN_TIMEOUT_SECS: u64 = 10;

/// 等待 Ctrl+C 信号
pub async fn wait_for_signal() {
    wait_for_shutdown(signal::ctrl_c()).await
}

/// 监听失败时永不返回，服务器继续运行
async fn wait_for_shutdown<F>(listener: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match listener.await {
        Ok(()) => {
            info!("Shutdown signal received, stopping server...");
        }
        Err(e) => {
            error!(
                "Failed to listen for Ctrl+C: {}. Server keeps running without signal handling.",
                e
            );
            std::future::pending::<()>().await;
        }
    }
}

/// 服务器停止后等待在途的访问计数写完
pub async fn drain_visits(visits: &VisitCounter) {
    let pending = visits.in_flight();
    if pending == 0 {
        info!("No pending visit increments");
        return;
    }

    info!("Waiting for {} pending visit increments", pending);
    match timeout(Duration::from_secs(DRAIN_TIMEOUT_SECS), visits.drain()).await {
        Ok(()) => {
            info!("All visit increments completed");
        }
        Err(_) => {
            error!(
                "Visit increments still pending after {} seconds ({} left), giving up",
                DRAIN_TIMEOUT_SECS,
                visits.in_flight()
            );
        }
    }
}
