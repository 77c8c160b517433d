pub mod config;
pub mod describe;
pub mod list;
pub mod run;
pub mod serve;

use actions_core::config::Config;
use actions_core::Dispatcher;
use anyhow::Context;
use std::path::Path;

/// Load and validate the config, then build the dispatcher from it.
pub fn load_dispatcher(config_path: &Path) -> anyhow::Result<Dispatcher> {
    let config = Config::load(config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    config.ensure_valid()?;
    Ok(Dispatcher::new(&config))
}
