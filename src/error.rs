/// Error types
///
/// One enum per concern. Messages crossing the iced boundary must be
/// `Clone`, so handlers reduce these to text or to the backend's own
/// message before sending them on.
use thiserror::Error;

/// Errors from the SnapPro REST client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}: {}", .message.as_deref().unwrap_or(.body.as_str()))]
    Status {
        /// HTTP status code.
        status: u16,
        /// The JSON `message` field, when the body carried one.
        message: Option<String>,
        /// Raw response body.
        body: String,
    },

    /// An admin operation was attempted without a stored token.
    #[error("Authentication required")]
    Unauthenticated,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(error) => error.status().map(|s| s.as_u16()),
            ApiError::Unauthenticated => None,
        }
    }

    /// Text the backend chose to show users. Transport failures and
    /// bodies without a JSON `message` have none.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref().filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }
}

/// Errors from the durable session store.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to prepare session directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
