use thiserror::Error;

/// Rejection of user-entered search text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Fewer characters than the search box accepts
    #[error("search text must contain at least {min} characters (got {actual})")]
    TooShort { min: u64, actual: u64 },

    /// More characters than the search box accepts
    #[error("search text must contain at most {max} characters (got {actual})")]
    TooLong { max: u64, actual: u64 },
}

/// Any failure while talking to the remote image service.
///
/// These never leave the controller; they are logged and the previous
/// results stay on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    /// Connection, DNS, TLS or body-read error
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body could not be decoded into a result page
    #[error("malformed response payload: {0}")]
    MalformedPayload(String),
}

/// Problems building a searcher from configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid endpoint URL `{endpoint}`: {source}")]
    Endpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Http(String),
}
