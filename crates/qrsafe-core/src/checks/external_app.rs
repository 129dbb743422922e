//! Payloads that hand off to a non-HTTP handler (mail, phone, messaging apps).

use super::{CheckerKind, Finding};

/// Handler schemes, checked in order; first match wins. Case-sensitive.
pub const EXTERNAL_APP_SCHEMES: [&str; 4] = ["mailto:", "tel:", "sms:", "whatsapp:"];

pub fn check_external_app(payload: &str) -> Option<Finding> {
    let scheme = EXTERNAL_APP_SCHEMES
        .iter()
        .find(|scheme| payload.starts_with(*scheme))?;
    let name = scheme.trim_end_matches(':');
    Some(Finding::new(
        CheckerKind::ExternalApp,
        format!("This link opens an external app ({}).", name),
    ))
}
