//! Payload parsing helpers.
//!
//! Decoded QR text is opaque; these helpers decide whether it parses as an
//! absolute URL, expose its lower-cased path, and label what kind of text it is.

mod kind;
mod path;

pub use kind::{classify_payload, PayloadKind};
pub use path::lowercase_path;

/// Returns true if `payload` parses as an absolute URL (WHATWG URL syntax).
///
/// Never fails: unparsable input yields `false`.
///
/// # Examples
///
/// - `is_valid_url("https://example.com/")` → `true`
/// - `is_valid_url("tel:+15551234567")` → `true`
/// - `is_valid_url("not a url")` → `false`
pub fn is_valid_url(payload: &str) -> bool {
    url::Url::parse(payload).is_ok()
}

/// Returns true for valid URLs with an `http` or `https` scheme.
pub fn is_http_url(payload: &str) -> bool {
    url::Url::parse(payload)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}
