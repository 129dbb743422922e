//! Coarse labelling of decoded payload text.

use serde::Serialize;
use std::fmt;

/// What a decoded payload looks like, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    /// Parses as an absolute URL.
    Url,
    /// ASCII digits only.
    Numeric,
    /// Hex digits only, with at least one letter `a-f`.
    Hexadecimal,
    /// ASCII letters and digits.
    Alphanumeric,
    /// Anything else, including the empty payload.
    Text,
}

impl PayloadKind {
    pub fn label(self) -> &'static str {
        match self {
            PayloadKind::Url => "URL",
            PayloadKind::Numeric => "Numeric",
            PayloadKind::Hexadecimal => "Hexadecimal",
            PayloadKind::Alphanumeric => "Alphanumeric",
            PayloadKind::Text => "Text",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify_payload(payload: &str) -> PayloadKind {
    if super::is_valid_url(payload) {
        return PayloadKind::Url;
    }
    if payload.is_empty() {
        return PayloadKind::Text;
    }
    if payload.bytes().all(|b| b.is_ascii_digit()) {
        return PayloadKind::Numeric;
    }
    if payload.bytes().all(|b| b.is_ascii_hexdigit()) {
        return PayloadKind::Hexadecimal;
    }
    if payload.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return PayloadKind::Alphanumeric;
    }
    PayloadKind::Text
}
