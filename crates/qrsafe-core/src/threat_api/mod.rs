//! Reputation service lookups.
//!
//! Uses the curl crate (libcurl) to submit one candidate URL to a
//! threat-matching endpoint and report whether it matched a known malware or
//! social-engineering entry. Exactly one attempt per lookup; callers decide
//! whether to retry.

mod client;
mod error;
mod request;
mod response;

pub use client::SafeBrowsingClient;
pub use error::{classify, ErrorKind, ThreatCheckError};
pub use request::{FindThreatMatchesRequest, PLATFORM_TYPES, THREAT_ENTRY_TYPES, THREAT_TYPES};
pub use response::parse_response;

/// Result of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The service returned no matches.
    Clean,
    /// The service returned one or more matches; threat types as reported.
    Flagged { threat_types: Vec<String> },
}

impl LookupOutcome {
    pub fn is_flagged(&self) -> bool {
        matches!(self, LookupOutcome::Flagged { .. })
    }
}

/// A single blocking reputation lookup.
///
/// Implementations run on the blocking pool (`spawn_blocking`), never on the
/// async executor, and must not retry internally.
pub trait ThreatLookup: Send + Sync {
    fn lookup(&self, url: &str) -> Result<LookupOutcome, ThreatCheckError>;
}
