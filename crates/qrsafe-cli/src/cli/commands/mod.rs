//! CLI command handlers. Each command is in its own file.

mod batch;
mod completions;
mod config;
mod scan;

pub use batch::run_batch;
pub use completions::{run_completions, run_man};
pub use config::run_config;
pub use scan::run_scan;

use qrsafe_core::config::{QrSafeConfig, API_KEY_ENV};
use qrsafe_core::{SafeBrowsingClient, ThreatLookup};
use std::sync::Arc;
use std::time::Duration;

/// Flags shared by `scan` and `batch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanFlags {
    pub expand: bool,
    pub json: bool,
}

/// Reputation client from config. Without an API key every lookup fails,
/// which the pipeline reports as an unverified warning.
fn threat_lookup(cfg: &QrSafeConfig) -> Arc<dyn ThreatLookup> {
    if cfg.threat_list.api_key.is_none() {
        tracing::warn!("no reputation API key configured");
        eprintln!(
            "warning: no API key for the reputation service; set {} or threat_list.api_key",
            API_KEY_ENV
        );
    }
    Arc::new(SafeBrowsingClient::from_config(&cfg.threat_list))
}

/// Expansion timeout when expansion is requested by flag or config.
fn expand_timeout(cfg: &QrSafeConfig, flags: ScanFlags) -> Option<Duration> {
    (flags.expand || cfg.expand_short_links).then(|| cfg.expand_timeout())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_timeout_from_flag_or_config() {
        let mut cfg = QrSafeConfig::default();
        assert_eq!(expand_timeout(&cfg, ScanFlags::default()), None);
        let flags = ScanFlags {
            expand: true,
            json: false,
        };
        assert_eq!(expand_timeout(&cfg, flags), Some(Duration::from_secs(5)));
        cfg.expand_short_links = true;
        cfg.expand_timeout_secs = 2;
        assert_eq!(
            expand_timeout(&cfg, ScanFlags::default()),
            Some(Duration::from_secs(2))
        );
    }
}
