//! Aggregate classification of a payload's findings.

use serde::Serialize;

use crate::checks::Finding;

/// Shown in place of a verdict text when nothing was found.
pub const SAFE_MESSAGE: &str = "No issues detected. The QR code appears to be safe.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum Verdict {
    /// No checker reported anything.
    Safe,
    /// One or more findings, their messages joined by a single space.
    Warning { text: String },
}

impl Verdict {
    /// Builds the verdict from findings already in registration order.
    pub fn from_findings(findings: &[Finding]) -> Self {
        let text = findings
            .iter()
            .map(|f| f.message.as_str())
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if text.is_empty() {
            Verdict::Safe
        } else {
            Verdict::Warning { text }
        }
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Verdict::Safe)
    }

    /// Verdict text, or `None` for `Safe`.
    pub fn text(&self) -> Option<&str> {
        match self {
            Verdict::Safe => None,
            Verdict::Warning { text } => Some(text.as_str()),
        }
    }

    /// Text for presentation: the warning text, or the safe banner.
    pub fn display_text(&self) -> &str {
        self.text().unwrap_or(SAFE_MESSAGE)
    }
}
