//! 服务器模式
//!
//! 构建 actix-web 应用并监听端口，收到 Ctrl+C 后停止接收请求，
//! 再等待在途的访问计数写完。

use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::{Context, Result};
use tracing::warn;

use crate::api::services::{AppStartTime, RedirectService, health_routes, redirect_routes};
use crate::config::StaticConfig;
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &StaticConfig) -> Result<()> {
    let app_start_time = AppStartTime::now();

    let startup = lifetime::startup::prepare_server_startup(config)
        .await
        .map_err(|e| {
            tracing::error!("Server startup failed: {}", e);
            e
        })?;

    let resolver = web::Data::from(startup.resolver.clone());
    let store = web::Data::new(startup.store());
    let settings = web::Data::new(startup.settings.clone());
    let start_time = web::Data::new(app_start_time);

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .app_data(resolver.clone())
            .app_data(store.clone())
            .app_data(settings.clone())
            .app_data(start_time.clone())
            .service(health_routes())
            .service(redirect_routes())
            .default_service(web::to(RedirectService::handle_unmatched))
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .disable_signals()
    .workers(cpu_count);

    warn!("Starting server at http://{}", bind_address);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();
    let handle = server.handle();
    let server_task = actix_web::rt::spawn(server);

    tokio::select! {
        res = server_task => {
            res.context("Server task panicked")?
                .context("HTTP server error")?;
        }
        _ = lifetime::shutdown::wait_for_signal() => {
            handle.stop(true).await;
        }
    }

    lifetime::shutdown::drain_visits(startup.visits()).await;
    warn!("Graceful shutdown completed");

    Ok(())
}
