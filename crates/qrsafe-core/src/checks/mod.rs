//! Heuristic checkers.
//!
//! Each checker inspects one payload for one risk category and returns an
//! explicit `Option<Finding>`: `None` means nothing of concern was found.

mod auto_download;
mod external_app;
mod threat_list;

pub use auto_download::{check_auto_download, DOWNLOAD_EXTENSIONS};
pub use external_app::{check_external_app, EXTERNAL_APP_SCHEMES};
pub use threat_list::{
    check_threat_list, INVALID_URL_MESSAGE, LOOKUP_FAILED_MESSAGE, MALICIOUS_MESSAGE,
};

use serde::Serialize;
use std::fmt;

/// Checker identity, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckerKind {
    ExternalApp,
    AutoDownload,
    ThreatList,
}

impl CheckerKind {
    /// All checkers in the order their findings are reported.
    pub const ALL: [CheckerKind; 3] = [
        CheckerKind::ExternalApp,
        CheckerKind::AutoDownload,
        CheckerKind::ThreatList,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CheckerKind::ExternalApp => "external_app",
            CheckerKind::AutoDownload => "auto_download",
            CheckerKind::ThreatList => "threat_list",
        }
    }
}

impl fmt::Display for CheckerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A risk detected by one checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub checker: CheckerKind,
    pub message: String,
}

impl Finding {
    pub fn new(checker: CheckerKind, message: impl Into<String>) -> Self {
        Self {
            checker,
            message: message.into(),
        }
    }
}
