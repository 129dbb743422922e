//! `qrsafe batch <file>` – analyse one payload per line.

use anyhow::{Context, Result};
use qrsafe_core::batch;
use qrsafe_core::config::QrSafeConfig;
use std::path::Path;

use super::{expand_timeout, threat_lookup, ScanFlags};
use crate::cli::render;

/// Returns true when every verdict is safe.
pub async fn run_batch(
    cfg: &QrSafeConfig,
    path: &Path,
    jobs: Option<usize>,
    flags: ScanFlags,
) -> Result<bool> {
    let data = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let payloads = parse_payload_lines(&data);
    if payloads.is_empty() {
        println!("No payloads in {}.", path.display());
        return Ok(true);
    }

    let lookup = threat_lookup(cfg);
    let jobs = jobs.unwrap_or(cfg.max_concurrent);
    let reports = batch::analyze_all(payloads, lookup, jobs, expand_timeout(cfg, flags)).await;
    let warnings = reports.iter().filter(|r| !r.verdict().is_safe()).count();
    tracing::info!(total = reports.len(), warnings, "batch completed");

    if flags.json {
        println!("{}", render::reports_json(&reports)?);
    } else {
        print!("{}", render::reports_table(&reports));
        println!("{} payload(s), {} warning(s).", reports.len(), warnings);
    }
    Ok(warnings == 0)
}

/// Non-empty lines, line terminators stripped.
fn parse_payload_lines(data: &str) -> Vec<String> {
    data.lines()
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}
