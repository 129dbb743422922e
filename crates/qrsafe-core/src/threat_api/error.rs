//! Lookup error type and its classification for logging.

/// Error returned by a reputation lookup (transport failure, HTTP error, bad body).
/// The threat-list checker turns every variant into a warning finding.
#[derive(Debug, thiserror::Error)]
pub enum ThreatCheckError {
    #[error("no API key configured for the reputation service")]
    MissingApiKey,
    #[error("invalid reputation endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("encode request: {0}")]
    Encode(#[source] serde_json::Error),
    /// Curl reported an error (timeout, connection, etc.).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Body was not the expected JSON object.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The blocking lookup task panicked or was cancelled.
    #[error("lookup task failed: {0}")]
    Aborted(String),
}

/// High-level classification of a lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect/read).
    Timeout,
    /// Network-level failure (connection reset, DNS, etc.).
    Connection,
    /// Service asked us to slow down (429, 503).
    Throttled,
    /// Other 5xx status.
    Http5xx(u16),
    /// Configuration, decoding, or anything else.
    Other,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Timeout => "timeout",
            ErrorKind::Connection => "connection",
            ErrorKind::Throttled => "throttled",
            ErrorKind::Http5xx(_) => "http_5xx",
            ErrorKind::Other => "other",
        }
    }
}

fn classify_http_status(code: u32) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Throttled,
        500..=599 => ErrorKind::Http5xx(code as u16),
        _ => ErrorKind::Other,
    }
}

fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

pub fn classify(e: &ThreatCheckError) -> ErrorKind {
    match e {
        ThreatCheckError::Transport(ce) => classify_curl_error(ce),
        ThreatCheckError::Http(code) => classify_http_status(*code),
        _ => ErrorKind::Other,
    }
}
