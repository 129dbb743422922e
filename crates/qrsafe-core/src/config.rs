use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides `threat_list.api_key`.
pub const API_KEY_ENV: &str = "QRSAFE_API_KEY";

pub const DEFAULT_THREAT_ENDPOINT: &str =
    "https://safebrowsing.googleapis.com/v4/threatMatches:find";

/// Reputation service settings (`[threat_list]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreatListConfig {
    /// Threat-matching endpoint; the API key is appended as `?key=`.
    pub endpoint: String,
    /// API key for the reputation service. Usually supplied via `QRSAFE_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Client identifier sent with each lookup.
    pub client_id: String,
    /// Client version sent with each lookup.
    pub client_version: String,
    pub connect_timeout_secs: u64,
    /// Upper bound for one lookup, connect included.
    pub timeout_secs: u64,
}

impl Default for ThreatListConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_THREAT_ENDPOINT.to_string(),
            api_key: None,
            client_id: "qrsafe".to_string(),
            client_version: env!("CARGO_PKG_VERSION").to_string(),
            connect_timeout_secs: 10,
            timeout_secs: 15,
        }
    }
}

impl ThreatListConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Global configuration loaded from `~/.config/qrsafe/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrSafeConfig {
    /// Follow redirects of http(s) payloads before analysis.
    #[serde(default)]
    pub expand_short_links: bool,
    /// Timeout for one expansion request, redirects included.
    #[serde(default = "default_expand_timeout_secs")]
    pub expand_timeout_secs: u64,
    /// Maximum analyses in flight for batch runs.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
    #[serde(default)]
    pub threat_list: ThreatListConfig,
}

fn default_max_concurrent() -> usize {
    4
}

fn default_expand_timeout_secs() -> u64 {
    5
}

impl Default for QrSafeConfig {
    fn default() -> Self {
        Self {
            expand_short_links: false,
            expand_timeout_secs: default_expand_timeout_secs(),
            max_concurrent: default_max_concurrent(),
            threat_list: ThreatListConfig::default(),
        }
    }
}

impl QrSafeConfig {
    pub fn expand_timeout(&self) -> Duration {
        Duration::from_secs(self.expand_timeout_secs)
    }

    /// Applies `QRSAFE_API_KEY` if set and non-empty.
    pub fn apply_env(mut self) -> Self {
        self.apply_api_key(std::env::var(API_KEY_ENV).ok());
        self
    }

    fn apply_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()) {
            self.threat_list.api_key = Some(key);
        }
    }

    /// Copy of the config safe to print: the API key is masked.
    pub fn redacted(&self) -> Self {
        let mut cfg = self.clone();
        if cfg.threat_list.api_key.is_some() {
            cfg.threat_list.api_key = Some("********".to_string());
        }
        cfg
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qrsafe")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
/// The environment override is applied on top.
pub fn load_or_init() -> Result<QrSafeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = QrSafeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg.apply_env());
    }

    Ok(load_from_path(&path)?.apply_env())
}

/// Parse a config file without touching the environment.
pub fn load_from_path(path: &Path) -> Result<QrSafeConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: QrSafeConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
