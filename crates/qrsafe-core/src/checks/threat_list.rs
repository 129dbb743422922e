//! Remote reputation lookup, fail-to-warn.

use std::sync::Arc;

use super::{CheckerKind, Finding};
use crate::threat_api::{self, LookupOutcome, ThreatCheckError, ThreatLookup};
use crate::url_model;

pub const INVALID_URL_MESSAGE: &str = "The QR code does not contain a valid URL.";
pub const MALICIOUS_MESSAGE: &str = "Warning: This URL has been flagged as potentially malicious.";
pub const LOOKUP_FAILED_MESSAGE: &str = "Unable to check URL safety due to an error.";

/// Validates the payload, then performs exactly one reputation lookup on the
/// blocking pool.
///
/// Invalid URLs, matches, and any lookup failure each yield a finding; only a
/// completed lookup with no matches yields `None`.
pub async fn check_threat_list(payload: &str, lookup: Arc<dyn ThreatLookup>) -> Option<Finding> {
    if !url_model::is_valid_url(payload) {
        return Some(Finding::new(CheckerKind::ThreatList, INVALID_URL_MESSAGE));
    }

    let result = tokio::task::spawn_blocking({
        let url = payload.to_string();
        move || lookup.lookup(&url)
    })
    .await
    .unwrap_or_else(|e| Err(ThreatCheckError::Aborted(e.to_string())));

    match result {
        Ok(LookupOutcome::Clean) => None,
        Ok(LookupOutcome::Flagged { threat_types }) => {
            tracing::debug!(?threat_types, "reputation service flagged url");
            Some(Finding::new(CheckerKind::ThreatList, MALICIOUS_MESSAGE))
        }
        Err(e) => {
            let kind = threat_api::classify(&e);
            tracing::warn!(kind = kind.as_str(), "reputation lookup failed: {}", e);
            Some(Finding::new(CheckerKind::ThreatList, LOOKUP_FAILED_MESSAGE))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Lookup stub that returns a fixed result and counts calls.
    struct Stub {
        calls: AtomicUsize,
        result: fn() -> Result<LookupOutcome, ThreatCheckError>,
    }

    impl Stub {
        fn new(result: fn() -> Result<LookupOutcome, ThreatCheckError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                result,
            })
        }
    }

    impl ThreatLookup for Stub {
        fn lookup(&self, _url: &str) -> Result<LookupOutcome, ThreatCheckError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }
    }

    struct Panics;

    impl ThreatLookup for Panics {
        fn lookup(&self, _url: &str) -> Result<LookupOutcome, ThreatCheckError> {
            panic!("lookup exploded");
        }
    }

    #[tokio::test]
    async fn invalid_url_skips_lookup() {
        let stub = Stub::new(|| Ok(LookupOutcome::Clean));
        let f = check_threat_list("not a url", stub.clone()).await.unwrap();
        assert_eq!(f.checker, CheckerKind::ThreatList);
        assert_eq!(f.message, INVALID_URL_MESSAGE);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn clean_lookup_has_no_finding() {
        let stub = Stub::new(|| Ok(LookupOutcome::Clean));
        assert!(check_threat_list("https://example.com/", stub.clone())
            .await
            .is_none());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn flagged_lookup_warns() {
        let stub = Stub::new(|| {
            Ok(LookupOutcome::Flagged {
                threat_types: vec!["MALWARE".to_string()],
            })
        });
        let f = check_threat_list("http://evil.test/", stub).await.unwrap();
        assert_eq!(f.message, MALICIOUS_MESSAGE);
    }

    #[tokio::test]
    async fn handler_scheme_is_looked_up() {
        let stub = Stub::new(|| Ok(LookupOutcome::Clean));
        assert!(check_threat_list("tel:+15551234567", stub.clone())
            .await
            .is_none());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn lookup_errors_fail_to_warn() {
        let errors: [fn() -> Result<LookupOutcome, ThreatCheckError>; 3] = [
            || Err(ThreatCheckError::Http(500)),
            || Err(ThreatCheckError::Decode("eof".to_string())),
            || Err(ThreatCheckError::MissingApiKey),
        ];
        for result in errors {
            let f = check_threat_list("https://example.com/", Stub::new(result))
                .await
                .unwrap();
            assert_eq!(f.message, LOOKUP_FAILED_MESSAGE);
        }
    }

    #[tokio::test]
    async fn panicking_lookup_fails_to_warn() {
        let f = check_threat_list("https://example.com/", Arc::new(Panics))
            .await
            .unwrap();
        assert_eq!(f.message, LOOKUP_FAILED_MESSAGE);
    }
}
