//! `qrsafe scan [payload]` – analyse one decoded payload.

use anyhow::{Context, Result};
use qrsafe_core::analyzer;
use qrsafe_core::config::QrSafeConfig;
use tokio::io::AsyncReadExt;

use super::{expand_timeout, threat_lookup, ScanFlags};
use crate::cli::render;

/// Returns true when the verdict is safe.
pub async fn run_scan(cfg: &QrSafeConfig, payload: Option<String>, flags: ScanFlags) -> Result<bool> {
    let payload = match payload {
        Some(p) => p,
        None => read_stdin_payload().await?,
    };

    let lookup = threat_lookup(cfg);
    let report = analyzer::scan(&payload, expand_timeout(cfg, flags), lookup).await;
    let verdict = report.verdict();
    tracing::info!(
        kind = %report.kind,
        findings = report.findings.len(),
        safe = verdict.is_safe(),
        "scan completed"
    );

    if flags.json {
        println!("{}", render::report_json(&report)?);
    } else {
        print!("{}", render::report_text(&report));
    }
    Ok(verdict.is_safe())
}

async fn read_stdin_payload() -> Result<String> {
    let mut buf = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buf)
        .await
        .context("read payload from stdin")?;
    Ok(trim_line_ending(&buf).to_string())
}

/// Strips one trailing line terminator; the payload is otherwise opaque.
fn trim_line_ending(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}
