//! Analyse many payloads concurrently.
//!
//! Keeps up to `max_concurrent` analyses in flight; when one finishes, the
//! next payload is started until the input is exhausted. Analyses share no
//! mutable state, so the only coordination is the in-flight bound.

use std::sync::Arc;
use std::time::Duration;

use crate::analyzer::{self, SafetyReport};
use crate::checks::{CheckerKind, Finding, LOOKUP_FAILED_MESSAGE};
use crate::threat_api::ThreatLookup;
use crate::url_model;

/// Runs [`analyzer::scan`] over `payloads` with a bounded number in flight.
/// Reports are returned in input order.
pub async fn analyze_all(
    payloads: Vec<String>,
    lookup: Arc<dyn ThreatLookup>,
    max_concurrent: usize,
    expand_timeout: Option<Duration>,
) -> Vec<SafetyReport> {
    let max_concurrent = max_concurrent.max(1);
    let mut reports: Vec<Option<SafetyReport>> = vec![None; payloads.len()];
    let mut pending = payloads.iter().cloned().enumerate();
    let mut join_set = tokio::task::JoinSet::new();

    loop {
        while join_set.len() < max_concurrent {
            let Some((index, payload)) = pending.next() else {
                break;
            };
            let lookup = Arc::clone(&lookup);
            join_set.spawn(async move {
                let report = analyzer::scan(&payload, expand_timeout, lookup).await;
                (index, report)
            });
        }

        match join_set.join_next().await {
            Some(Ok((index, report))) => reports[index] = Some(report),
            Some(Err(e)) => tracing::warn!("analysis task failed: {}", e),
            None => break,
        }
    }

    tracing::debug!(total = payloads.len(), "batch analysis finished");

    reports
        .into_iter()
        .zip(payloads)
        .map(|(report, payload)| report.unwrap_or_else(|| aborted_report(payload)))
        .collect()
}

/// Report for a payload whose analysis task died: unable to verify means warn.
fn aborted_report(payload: String) -> SafetyReport {
    SafetyReport {
        kind: url_model::classify_payload(&payload),
        payload,
        expanded_from: None,
        findings: vec![Finding::new(CheckerKind::ThreatList, LOOKUP_FAILED_MESSAGE)],
    }
}
