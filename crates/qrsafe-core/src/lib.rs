//! QRSafe core: safety analysis of decoded QR code payloads.
//!
//! A payload enters [`analyzer::analyze`], which runs the external-app,
//! auto-download, and threat-list checkers concurrently and folds their
//! findings into a [`analyzer::Verdict`].

pub mod config;
pub mod logging;

pub mod analyzer;
pub mod batch;
pub mod checks;
pub mod expand;
pub mod threat_api;
pub mod url_model;

pub use analyzer::{analyze, scan, SafetyReport, Verdict};
pub use checks::{CheckerKind, Finding};
pub use threat_api::{LookupOutcome, SafeBrowsingClient, ThreatCheckError, ThreatLookup};
