use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .load_full()
}

/// Initialize the global configuration from `config.toml` and the environment
///
/// If the file doesn't exist, uses in-memory defaults. Calling it twice is a no-op.
///
/// # Examples
/// ```no_run
/// use dynqr::config::init_config;
/// init_config();
/// ```
pub fn init_config() {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load()));
}

/// Initialize the global configuration from an explicit TOML file
///
/// Unlike [`init_config`], a broken file is reported instead of silently
/// replaced by defaults.
pub fn init_config_from(path: &str) -> Result<()> {
    let config = StaticConfig::load_from(path, true)?;
    match CONFIG.get() {
        Some(existing) => existing.store(Arc::new(config)),
        None => {
            CONFIG.get_or_init(|| ArcSwap::from_pointee(config));
        }
    }
    Ok(())
}

