/// Error types for the instance list request
use thiserror::Error;

/// Ways a `GET /api/instances` can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The backend answered with a non-2xx status
    #[error("HTTP status {0}")]
    Status(u16),

    /// No HTTP response at all (refused, reset, DNS, timeout)
    #[error("Network error: {0}")]
    Transport(String),

    /// 2xx response whose body is not an instance list
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Status code shown to the user. Failures without an HTTP status report
    /// `0`, matching what a browser client sees for an aborted request.
    pub fn status(&self) -> u16 {
        match self {
            FetchError::Status(code) => *code,
            FetchError::Transport(_) | FetchError::Decode(_) => 0,
        }
    }
}
