//! URL path extraction.

/// Parses `payload` as a URL and returns its path, lower-cased.
///
/// Returns `None` if the payload does not parse. Query and fragment are not
/// part of the path.
pub fn lowercase_path(payload: &str) -> Option<String> {
    let parsed = url::Url::parse(payload).ok()?;
    Some(parsed.path().to_lowercase())
}
