//! Request body for the threat-matching endpoint.

use serde::Serialize;

pub const THREAT_TYPES: &[&str] = &["MALWARE", "SOCIAL_ENGINEERING"];
pub const PLATFORM_TYPES: &[&str] = &["ANY_PLATFORM"];
pub const THREAT_ENTRY_TYPES: &[&str] = &["URL"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindThreatMatchesRequest<'a> {
    pub client: ClientInfo<'a>,
    pub threat_info: ThreatInfo<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo<'a> {
    pub client_id: &'a str,
    pub client_version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatInfo<'a> {
    pub threat_types: &'static [&'static str],
    pub platform_types: &'static [&'static str],
    pub threat_entry_types: &'static [&'static str],
    pub threat_entries: Vec<ThreatEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ThreatEntry<'a> {
    pub url: &'a str,
}

impl<'a> FindThreatMatchesRequest<'a> {
    /// Request for a single URL entry with the fixed threat/platform/entry types.
    pub fn for_url(client_id: &'a str, client_version: &'a str, url: &'a str) -> Self {
        Self {
            client: ClientInfo {
                client_id,
                client_version,
            },
            threat_info: ThreatInfo {
                threat_types: THREAT_TYPES,
                platform_types: PLATFORM_TYPES,
                threat_entry_types: THREAT_ENTRY_TYPES,
                threat_entries: vec![ThreatEntry { url }],
            },
        }
    }
}
