//! `qrsafe config path|show`.

use anyhow::Result;
use qrsafe_core::config::{self, QrSafeConfig};

use crate::cli::ConfigAction;

pub fn run_config(cfg: &QrSafeConfig, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => println!("{}", config::config_path()?.display()),
        ConfigAction::Show => print!("{}", toml::to_string_pretty(&cfg.redacted())?),
    }
    Ok(())
}
