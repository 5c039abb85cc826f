use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use url::Url;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShareConfig {
    /// Origin that fabricated share links are built on
    #[serde(default = "default_share_origin")]
    pub origin: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            origin: default_share_origin(),
        }
    }
}

fn default_share_origin() -> String {
    "http://localhost:8080".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON lines instead of the pretty console format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl ShareConfig {
    pub fn origin_url(&self) -> tripcraft_shared::Result<Url> {
        let url = Url::parse(&self.origin)
            .map_err(|e| tripcraft_shared::Error::Config(format!("share.origin: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            tripcraft_shared::bail!("share.origin must use http or https, got {}", url.scheme());
        }

        Ok(url)
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (TRIPCRAFT__SHARE__ORIGIN, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("share.origin", default_share_origin())?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.json", false)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // optional, a missing file keeps the defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("TRIPCRAFT")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> tripcraft_shared::Result<()> {
        self.share.origin_url()?;

        if self.observability.log_level.trim().is_empty() {
            tripcraft_shared::bail!("observability.log_level must not be empty");
        }

        Ok(())
    }
}
