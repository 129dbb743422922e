//! Safety aggregator.
//!
//! Fans one payload out to the three checkers concurrently, waits for all of
//! them, and reports findings in registration order (external-app,
//! auto-download, threat-list), independent of completion order.

mod verdict;

pub use verdict::{Verdict, SAFE_MESSAGE};

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::checks::{self, Finding};
use crate::expand;
use crate::threat_api::ThreatLookup;
use crate::url_model::{self, PayloadKind};

/// Outcome of one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyReport {
    /// Text that was analysed.
    pub payload: String,
    /// Scanned text, when `payload` is its expanded destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded_from: Option<String>,
    pub kind: PayloadKind,
    /// Non-empty findings in registration order.
    pub findings: Vec<Finding>,
}

impl SafetyReport {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_findings(&self.findings)
    }
}

/// Runs all checkers on `payload` and joins their results. Never fails:
/// lookup failures arrive as findings.
pub async fn analyze(payload: &str, lookup: Arc<dyn ThreatLookup>) -> SafetyReport {
    let (external_app, auto_download, threat_list) = tokio::join!(
        async { checks::check_external_app(payload) },
        async { checks::check_auto_download(payload) },
        checks::check_threat_list(payload, lookup),
    );

    let findings: Vec<Finding> = [external_app, auto_download, threat_list]
        .into_iter()
        .flatten()
        .filter(|f| !f.message.is_empty())
        .collect();

    for f in &findings {
        tracing::debug!(checker = %f.checker, "finding: {}", f.message);
    }

    SafetyReport {
        payload: payload.to_string(),
        expanded_from: None,
        kind: url_model::classify_payload(payload),
        findings,
    }
}

/// Like [`analyze`], but first expands http(s) short links when
/// `expand_timeout` is set. Findings describe the expanded destination.
pub async fn scan(
    payload: &str,
    expand_timeout: Option<Duration>,
    lookup: Arc<dyn ThreatLookup>,
) -> SafetyReport {
    let target = match expand_timeout {
        Some(timeout) => expand::expand_payload(payload, timeout).await,
        None => payload.to_string(),
    };

    let mut report = analyze(&target, lookup).await;
    if target != payload {
        report.expanded_from = Some(payload.to_string());
    }
    report
}
