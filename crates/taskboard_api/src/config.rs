//! Server configuration.
//!
//! TOML file with per-section defaults; every section may be omitted.
//! Secrets belong in the `[auth]` section — the built-in defaults are
//! development-only literals.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use taskboard_core::TokenConfig;

const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub auth: TokenConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address, e.g. `127.0.0.1:3000`.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace|debug|info|warn|error; defaults by build mode when unset.
    pub level: Option<String>,
    /// Log directory; stderr when unset.
    pub dir: Option<PathBuf>,
}

impl ApiConfig {
    /// Loads configuration from `path`, or returns defaults when no file
    /// was given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file `{}`", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config file `{}`", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::ApiConfig;

    #[test]
    fn defaults_cover_every_section() {
        let config = ApiConfig::load(None).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert!(config.logging.level.is_none());
        assert_eq!(config.auth.access_ttl_secs, 15 * 60);
    }

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let raw = r#"
            [server]
            bind = "0.0.0.0:8080"

            [auth]
            access_secret = "prod-access"
            refresh_secret = "prod-refresh"
        "#;
        let config: ApiConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.auth.access_secret, "prod-access");
        assert_eq!(config.auth.refresh_ttl_secs, 7 * 24 * 60 * 60);
    }
}
