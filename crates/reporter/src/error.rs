use std::time::Duration;

/// Why a score submission failed. Never reaches game state; only logged.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid score endpoint {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: hyper::http::uri::InvalidUri,
    },

    #[error("unsupported scheme in {0:?} (only http:// is supported)")]
    UnsupportedScheme(String),

    #[error("score endpoint {0:?} has no host")]
    MissingHost(String),

    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },

    #[error("failed to build request: {0}")]
    Request(#[from] hyper::http::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] hyper::Error),

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("server answered {status}")]
    Status { status: u16, message: Option<String> },

    #[error("no answer within {0:?}")]
    Timeout(Duration),
}
