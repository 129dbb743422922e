//! Short-link expansion.
//!
//! Follows the redirect chain of an http(s) payload with a HEAD request so
//! the analysis sees the final destination rather than the shortener. Any
//! failure leaves the payload unchanged.

use anyhow::{Context, Result};
use std::time::Duration;

use crate::url_model;

const MAX_REDIRECTS: u32 = 10;

/// Performs a HEAD request following redirects and returns the effective URL,
/// or `url` itself when no redirect was followed.
///
/// The final status code is not checked: a 404 at the end of a redirect chain
/// still tells us where the chain ends.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn resolve_redirects(url: &str, timeout: Duration) -> Result<String> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;
    easy.connect_timeout(timeout)?;
    easy.timeout(timeout)?;
    easy.write_function(|data| Ok(data.len()))?;
    easy.perform().context("HEAD request failed")?;

    // curl normalizes the effective URL (`http://host` -> `http://host/`).
    if easy.redirect_count()? == 0 {
        return Ok(url.to_string());
    }
    let effective = easy
        .effective_url()
        .context("no effective URL")?
        .map(str::to_string)
        .unwrap_or_else(|| url.to_string());
    Ok(effective)
}

/// Expands `payload` if it is an http(s) URL; otherwise, or on any failure,
/// returns it unchanged.
pub async fn expand_payload(payload: &str, timeout: Duration) -> String {
    if !url_model::is_http_url(payload) {
        return payload.to_string();
    }

    let result = tokio::task::spawn_blocking({
        let url = payload.to_string();
        move || resolve_redirects(&url, timeout)
    })
    .await;

    match result {
        Ok(Ok(expanded)) => {
            if expanded != payload {
                tracing::debug!(from = payload, to = %expanded, "expanded short link");
            }
            expanded
        }
        Ok(Err(e)) => {
            tracing::debug!("short-link expansion failed, keeping payload: {:#}", e);
            payload.to_string()
        }
        Err(e) => {
            tracing::warn!("short-link expansion task failed: {}", e);
            payload.to_string()
        }
    }
}
