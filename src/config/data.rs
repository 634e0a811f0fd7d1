//! Configuration structs plus the partial overlay an environment file may
//! apply on top of `base.toml`.

use serde::Deserialize;
use strum_macros::AsRefStr;

use crate::config::ConfigError;

// ###################################
// ->   STRUCTS
// ###################################

#[derive(AsRefStr)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_config: ApiConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

/// What an environment file is allowed to contain: any subset of the full
/// configuration. Fields left out keep their `base.toml` value.
#[derive(Deserialize, Debug, Default)]
pub struct AppConfigOverlay {
    pub api_config: Option<ApiConfigOverlay>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ApiConfigOverlay {
    pub base_url: Option<String>,
}

// ###################################
// ->   IMPLs
// ###################################

impl AppConfig {
    /// Folds an environment overlay into the base configuration, field by
    /// field. Absent overlay fields leave the base untouched.
    pub fn apply(&mut self, overlay: AppConfigOverlay) {
        if let Some(api_overlay) = overlay.api_config {
            if let Some(base_url) = api_overlay.base_url {
                self.api_config.base_url = base_url;
            }
        }
    }
}

// ###################################
// ->   TRY FROMs
// ###################################

impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail),
        }
    }
}

impl TryFrom<&str> for ApiConfig {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let url = reqwest::Url::parse(value).map_err(|_| Self::Error::StringToApiConfigFail)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Self::Error::StringToApiConfigFail);
        }

        Ok(ApiConfig {
            base_url: value.to_string(),
        })
    }
}

// ###################################
// ->   TESTS
// ###################################
