//! Blocking libcurl client for the threat-matching endpoint.

use std::fmt;
use std::time::Duration;

use crate::config::ThreatListConfig;

use super::request::FindThreatMatchesRequest;
use super::response::parse_response;
use super::{LookupOutcome, ThreatCheckError, ThreatLookup};

/// Client for a Safe Browsing v4 compatible `threatMatches:find` endpoint.
#[derive(Clone)]
pub struct SafeBrowsingClient {
    endpoint: String,
    api_key: Option<String>,
    client_id: String,
    client_version: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl fmt::Debug for SafeBrowsingClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeBrowsingClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "********"))
            .field("client_id", &self.client_id)
            .field("client_version", &self.client_version)
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SafeBrowsingClient {
    pub fn from_config(cfg: &ThreatListConfig) -> Self {
        Self {
            endpoint: cfg.endpoint.clone(),
            api_key: cfg.api_key.clone(),
            client_id: cfg.client_id.clone(),
            client_version: cfg.client_version.clone(),
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.timeout(),
        }
    }

    /// Endpoint with the API key appended as the `key` query parameter.
    fn request_url(&self) -> Result<url::Url, ThreatCheckError> {
        let key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ThreatCheckError::MissingApiKey)?;
        Ok(url::Url::parse_with_params(&self.endpoint, &[("key", key)])?)
    }

    /// Performs the POST and returns the HTTP status and raw body.
    fn post(&self, request_url: &url::Url, body: &[u8]) -> Result<(u32, Vec<u8>), ThreatCheckError> {
        let mut response = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(request_url.as_str())?;
        easy.post(true)?;
        easy.post_fields_copy(body)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        list.append("Content-Type: application/json")?;
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                response.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, response))
    }
}

impl ThreatLookup for SafeBrowsingClient {
    /// Runs in the current thread; call from `spawn_blocking` if used from async code.
    fn lookup(&self, url: &str) -> Result<LookupOutcome, ThreatCheckError> {
        let request_url = self.request_url()?;
        let request = FindThreatMatchesRequest::for_url(&self.client_id, &self.client_version, url);
        let body = serde_json::to_vec(&request).map_err(ThreatCheckError::Encode)?;

        let (code, response) = self.post(&request_url, &body)?;
        if !(200..300).contains(&code) {
            return Err(ThreatCheckError::Http(code));
        }
        parse_response(&response)
    }
}
