use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use crate::analytics::VisitCounter;
use crate::api::services::RedirectSettings;
use crate::config::StaticConfig;
use crate::services::{RedirectResolver, SlugService};
use crate::storage::{SeaOrmStorage, SlugStore, StorageFactory};
use crate::utils::parse_redirect_target;

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub resolver: Arc<RedirectResolver>,
    pub settings: RedirectSettings,
}

impl StartupContext {
    pub fn store(&self) -> Arc<dyn SlugStore> {
        self.storage.clone()
    }

    pub fn visits(&self) -> &VisitCounter {
        self.resolver.visits()
    }
}

/// 回退地址与主页在启动时校验一次，运行期不再检查
fn check_redirect_settings(settings: &RedirectSettings) -> Result<()> {
    if let Err(e) = parse_redirect_target(&settings.fallback_location) {
        bail!(
            "redirect.fallback_location '{}' is not a usable redirect target: {}",
            settings.fallback_location,
            e
        );
    }
    if let Some(home) = &settings.home_url {
        if let Err(e) = parse_redirect_target(home) {
            bail!(
                "redirect.home_url '{}' is not a usable redirect target: {}",
                home,
                e
            );
        }
        if home == "/" {
            bail!("redirect.home_url must not point back to '/'");
        }
    }
    Ok(())
}

/// 超时为 0 时每次扫码都会立即回退
fn check_lookup_timeout(timeout_ms: u64) -> Result<()> {
    if timeout_ms == 0 {
        bail!("redirect.lookup_timeout_ms must be greater than 0");
    }
    Ok(())
}

/// 准备服务器启动的上下文：存储、访问计数与解析器
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let settings = RedirectSettings::from_config(&config.redirect);
    check_redirect_settings(&settings)?;
    check_lookup_timeout(config.redirect.lookup_timeout_ms)?;

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    let visits = if config.redirect.count_visits {
        VisitCounter::new(storage.clone())
    } else {
        warn!("Visit counting is disabled in configuration");
        VisitCounter::disabled()
    };

    let resolver = Arc::new(RedirectResolver::new(
        storage.clone(),
        visits,
        config.lookup_timeout(),
    ));

    debug!(
        "Pre-startup processing completed in {:?} (lookup timeout {:?})",
        start_time.elapsed(),
        config.lookup_timeout()
    );

    Ok(StartupContext {
        storage,
        resolver,
        settings,
    })
}

/// CLI 模式只需要存储与管理服务
pub async fn prepare_cli_startup(config: &StaticConfig) -> crate::errors::Result<SlugService> {
    let storage = StorageFactory::create(&config.database).await?;
    Ok(SlugService::new(
        storage,
        config.redirect.public_base_url.clone(),
    ))
}
