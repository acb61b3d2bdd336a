//! Error taxonomy for backend calls.
//!
//! Every variant is caught at the call site and turned into a message for
//! display; the view keeps its last good state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    /// Backend answered with a non-2xx status. `message` is the body's
    /// `message` field, when it had one.
    #[error("HTTP error {status}{}", backend_detail(.message))]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// Call never completed (connect, timeout, TLS, ...)
    #[error("Network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// 2xx response whose body was not the expected JSON
    #[error("Unexpected response body: {0}")]
    Decode(String),

    /// Rejected client-side before any network call
    #[error("{0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for RequestError {
    fn from(source: reqwest::Error) -> Self {
        RequestError::Network { source }
    }
}

impl RequestError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short machine-readable kind, used in logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            RequestError::Status { .. } => "status_error",
            RequestError::Network { .. } => "network_error",
            RequestError::Decode(_) => "decode_error",
            RequestError::InvalidInput(_) => "invalid_input",
        }
    }

    /// Text shown in the UI.
    ///
    /// Backend messages are shown verbatim; everything else gets `context`
    /// as a prefix so the user knows which call failed.
    pub fn user_message(&self, context: &str) -> String {
        match self {
            RequestError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            RequestError::InvalidInput(message) => message.clone(),
            other => format!("{}: {}", context, other),
        }
    }
}

fn backend_detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|message| format!(": {}", message))
        .unwrap_or_default()
}
