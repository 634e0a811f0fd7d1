//! Application configuration.
//!
//! `config/base.toml` carries the defaults; the file named after
//! `APP_ENVIRONMENT` overrides whichever fields it lists. Production
//! additionally takes the unsubscribe endpoint from `APP_UNSUBSCRIBE_URL`
//! rather than from a file.

mod data;
mod error;

use std::path::Path;
use std::sync::OnceLock;

use tracing::info;

use data::{AppConfigOverlay, Environment};

// Re-export config structs
pub use data::{ApiConfig, AppConfig};
pub use error::{ConfigError, ConfigResult};

/// Loads the configuration on first call, every later call gets the same
/// `&'static` reference. Startup misconfiguration is unrecoverable, so any
/// load failure panics here.
pub fn get_or_init_config() -> &'static AppConfig {
    static CONFIG: OnceLock<AppConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        load_config().unwrap_or_else(|er| panic!("Fatal Error: Building config: {er}"))
    })
}

fn load_config() -> ConfigResult<AppConfig> {
    info!("{:<12} - Initializing the configuration", "load_config");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()?;
    let config_dir = std::env::current_dir()?.join("config");

    let mut config = read_layered(&config_dir, &environment)?;

    // Deployments choose the endpoint through the environment, not a file.
    if matches!(environment, Environment::Production) {
        let base_url =
            std::env::var("APP_UNSUBSCRIBE_URL").map_err(|_| ConfigError::MissingProductionUrl)?;
        config.api_config = ApiConfig::try_from(base_url.as_str())?;
    }

    Ok(config)
}

/// Parses `base.toml` into the full configuration, then folds in the
/// environment's overlay file.
fn read_layered(config_dir: &Path, environment: &Environment) -> ConfigResult<AppConfig> {
    let base = std::fs::read_to_string(config_dir.join("base.toml"))?;
    let mut config: AppConfig = toml::from_str(&base)?;

    let overlay_name = format!("{}.toml", environment.as_ref().to_lowercase());
    let overlay = std::fs::read_to_string(config_dir.join(overlay_name))?;
    config.apply(toml::from_str::<AppConfigOverlay>(&overlay)?);

    Ok(config)
}

// ###################################
// ->   TESTS
// ###################################
