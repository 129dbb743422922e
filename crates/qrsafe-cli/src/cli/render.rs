//! Text and JSON output for safety reports.

use anyhow::Result;
use qrsafe_core::{SafetyReport, Verdict};
use serde::Serialize;
use std::fmt::Write;

/// JSON shape: report fields plus the flattened verdict (`verdict`, `text`).
#[derive(Serialize)]
struct ReportView<'a> {
    #[serde(flatten)]
    report: &'a SafetyReport,
    #[serde(flatten)]
    verdict: Verdict,
}

impl<'a> ReportView<'a> {
    fn new(report: &'a SafetyReport) -> Self {
        Self {
            report,
            verdict: report.verdict(),
        }
    }
}

pub fn report_json(report: &SafetyReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ReportView::new(report))?)
}

pub fn reports_json(reports: &[SafetyReport]) -> Result<String> {
    let views: Vec<ReportView<'_>> = reports.iter().map(ReportView::new).collect();
    Ok(serde_json::to_string_pretty(&views)?)
}

pub fn report_text(report: &SafetyReport) -> String {
    let mut out = String::new();
    match &report.expanded_from {
        Some(original) => {
            let _ = writeln!(out, "Payload: {}", original);
            let _ = writeln!(out, "Expanded to: {}", report.payload);
        }
        None => {
            let _ = writeln!(out, "Payload: {}", report.payload);
        }
    }
    let _ = writeln!(out, "Type: {}", report.kind);
    let _ = writeln!(out, "{}", report.verdict().display_text());
    out
}

pub fn reports_table(reports: &[SafetyReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<5} {:<12} {}", "#", "VERDICT", "PAYLOAD");
    for (i, r) in reports.iter().enumerate() {
        let verdict = r.verdict();
        let label = if verdict.is_safe() { "safe" } else { "warning" };
        let _ = writeln!(out, "{:<5} {:<12} {}", i + 1, label, r.payload);
        if let Some(text) = verdict.text() {
            let _ = writeln!(out, "{:<5} {:<12} {}", "", "", text);
        }
    }
    out
}
