//! CLI for the QRSafe payload checker.

mod commands;
mod render;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use qrsafe_core::config;
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_batch, run_completions, run_config, run_man, run_scan, ScanFlags};

/// Exit code when `--fail-on-warning` is set and a payload was not safe.
pub const WARNING_EXIT_CODE: u8 = 2;

/// Top-level CLI for QRSafe.
#[derive(Debug, Parser)]
#[command(name = "qrsafe", version)]
#[command(about = "QRSafe: safety checks for decoded QR code payloads", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Analyse one decoded payload.
    Scan {
        /// Decoded QR text. Read from stdin when omitted.
        payload: Option<String>,
        /// Follow http(s) redirects and analyse the final destination.
        #[arg(long)]
        expand: bool,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
        /// Exit with status 2 when the verdict is a warning.
        #[arg(long)]
        fail_on_warning: bool,
    },

    /// Analyse every non-empty line of a file as a separate payload.
    Batch {
        /// File with one decoded payload per line.
        path: PathBuf,
        /// Analyse up to N payloads concurrently (default from config).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
        /// Follow http(s) redirects and analyse the final destinations.
        #[arg(long)]
        expand: bool,
        /// Print the reports as a JSON array.
        #[arg(long)]
        json: bool,
        /// Exit with status 2 when any verdict is a warning.
        #[arg(long)]
        fail_on_warning: bool,
    },

    /// Inspect the configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff).
    Man,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ConfigAction {
    /// Print the config file path.
    Path,
    /// Print the effective config (API key masked).
    Show,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => {
                run_completions(shell, &mut Cli::command());
                return Ok(ExitCode::SUCCESS);
            }
            CliCommand::Man => {
                run_man(Cli::command())?;
                return Ok(ExitCode::SUCCESS);
            }
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg.redacted());

        let all_safe = match cli.command {
            CliCommand::Scan {
                payload,
                expand,
                json,
                fail_on_warning,
            } => {
                let flags = ScanFlags { expand, json };
                let safe = run_scan(&cfg, payload, flags).await?;
                safe || !fail_on_warning
            }
            CliCommand::Batch {
                path,
                jobs,
                expand,
                json,
                fail_on_warning,
            } => {
                let flags = ScanFlags { expand, json };
                let safe = run_batch(&cfg, &path, jobs, flags).await?;
                safe || !fail_on_warning
            }
            CliCommand::Config { action } => {
                run_config(&cfg, action)?;
                true
            }
            CliCommand::Completions { .. } | CliCommand::Man => true,
        };

        Ok(if all_safe {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(WARNING_EXIT_CODE)
        })
    }
}

#[cfg(test)]
mod tests;
