//! URLs whose path looks like a direct file download.

use super::{CheckerKind, Finding};
use crate::url_model;

/// Extensions matched against the lower-cased path, in order; first match wins.
pub const DOWNLOAD_EXTENSIONS: [&str; 4] = [".exe", ".apk", ".zip", ".pdf"];

/// Returns no finding for payloads that do not parse as URLs; invalid URLs
/// are reported by the threat-list checker instead.
pub fn check_auto_download(payload: &str) -> Option<Finding> {
    let path = url_model::lowercase_path(payload)?;
    let ext = DOWNLOAD_EXTENSIONS.iter().find(|ext| path.ends_with(*ext))?;
    Some(Finding::new(
        CheckerKind::AutoDownload,
        format!(
            "Warning: This link may trigger an auto-download ({} file).",
            ext
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_extension_is_named() {
        for ext in DOWNLOAD_EXTENSIONS {
            let payload = format!("https://example.com/files/thing{}", ext);
            let f = check_auto_download(&payload).expect("finding");
            assert_eq!(f.checker, CheckerKind::AutoDownload);
            assert_eq!(
                f.message,
                format!("Warning: This link may trigger an auto-download ({} file).", ext)
            );
        }
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let f = check_auto_download("https://example.com/Installer.EXE").unwrap();
        assert!(f.message.contains("(.exe file)"));
        let f = check_auto_download("https://example.com/app.Apk").unwrap();
        assert!(f.message.contains("(.apk file)"));
    }

    #[test]
    fn query_and_fragment_ignored() {
        assert!(check_auto_download("https://example.com/file.pdf?dl=1").is_some());
        assert!(check_auto_download("https://example.com/view?f=file.exe").is_none());
        assert!(check_auto_download("https://example.com/page#file.zip").is_none());
    }

    #[test]
    fn non_download_paths() {
        assert!(check_auto_download("https://example.com/").is_none());
        assert!(check_auto_download("https://example.com/file.exe/").is_none());
        assert!(check_auto_download("https://example.com/archive.tar.gz").is_none());
        assert!(check_auto_download("tel:+15551234567").is_none());
    }

    #[test]
    fn unparsable_payload_has_no_finding() {
        assert!(check_auto_download("not a url").is_none());
        assert!(check_auto_download("file.exe").is_none());
        assert!(check_auto_download("").is_none());
    }
}
