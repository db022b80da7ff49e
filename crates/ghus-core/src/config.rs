use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::RetryPolicy;
use crate::search::ClientOptions;

/// Environment variable holding an optional GitHub token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per search (including the first).
    pub max_attempts: u32,
    /// Delay in milliseconds after the first failed attempt; doubles each retry.
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_ms: 1000,
        }
    }
}

/// Global configuration loaded from `~/.config/ghus/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GhusConfig {
    /// API root the search path is appended to.
    pub api_base_url: String,
    /// Results requested from the API per call (GitHub caps this at 100).
    pub per_page: u32,
    /// Results shown per page on the client side.
    pub page_size: usize,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for GhusConfig {
    fn default() -> Self {
        let client = ClientOptions::default();
        Self {
            api_base_url: client.base_url,
            per_page: client.per_page,
            page_size: 10,
            user_agent: client.user_agent,
            connect_timeout_secs: client.connect_timeout.as_secs(),
            request_timeout_secs: client.request_timeout.as_secs(),
            retry: None,
        }
    }
}

impl GhusConfig {
    /// Retry policy from the `[retry]` section; zero values are raised to 1.
    pub fn retry_policy(&self) -> RetryPolicy {
        match &self.retry {
            Some(r) => RetryPolicy::new(
                r.max_attempts.max(1),
                Duration::from_millis(r.base_delay_ms.max(1)),
            ),
            None => RetryPolicy::default(),
        }
    }

    /// Client settings; `token` usually comes from [`token_from_env`].
    pub fn client_options(&self, token: Option<String>) -> ClientOptions {
        ClientOptions {
            base_url: self.api_base_url.clone(),
            per_page: self.per_page.max(1),
            user_agent: self.user_agent.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            token,
        }
    }
}

/// Token from `GITHUB_TOKEN`, ignoring empty values.
pub fn token_from_env() -> Option<String> {
    std::env::var(TOKEN_ENV)
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ghus")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<GhusConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: GhusConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Pretty TOML form of `cfg`, as written to disk.
pub fn to_toml_string(cfg: &GhusConfig) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}

/// Write `cfg` to `path`, creating parent directories.
pub fn write_to_path(path: &Path, cfg: &GhusConfig) -> Result<()> {
    let toml = to_toml_string(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    Ok(())
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GhusConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GhusConfig::default();
        write_to_path(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}
