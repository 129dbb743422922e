//! Parse the threat-matching response body into a LookupOutcome.

use serde::Deserialize;
use serde_json::Value;

use super::{LookupOutcome, ThreatCheckError};

/// Entries are kept untyped: any entry counts as a match, whatever its shape.
#[derive(Debug, Deserialize)]
struct ThreatMatchesResponse {
    #[serde(default)]
    matches: Option<Vec<Value>>,
}

/// Parse a 2xx response body.
///
/// The body must be a JSON object. A non-empty `matches` array means the URL
/// is flagged; a missing, null, or empty one means clean. Threat types are
/// informational only and default to `UNKNOWN` when absent or not a string.
pub fn parse_response(body: &[u8]) -> Result<LookupOutcome, ThreatCheckError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| ThreatCheckError::Decode(e.to_string()))?;
    if !value.is_object() {
        return Err(ThreatCheckError::Decode("expected JSON object".to_string()));
    }
    let parsed: ThreatMatchesResponse =
        serde_json::from_value(value).map_err(|e| ThreatCheckError::Decode(e.to_string()))?;

    match parsed.matches {
        Some(matches) if !matches.is_empty() => Ok(LookupOutcome::Flagged {
            threat_types: matches
                .into_iter()
                .map(|m| {
                    m.get("threatType")
                        .and_then(Value::as_str)
                        .unwrap_or("UNKNOWN")
                        .to_string()
                })
                .collect(),
        }),
        _ => Ok(LookupOutcome::Clean),
    }
}
