use thiserror::Error;

/// Failure of a remote photo-service call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Connectivity or I/O failure before a complete reply arrived.
    #[error("transport error: {0}")]
    Transport(String),
    /// The service answered with a non-success HTTP status.
    #[error("server returned status {status}")]
    Server { status: u16 },
    /// Any other protocol failure: undecodable body, rejected request.
    #[error("client error: {0}")]
    Client(String),
}

impl ApiError {
    /// Default retry classification.
    ///
    /// Transport failures are retryable. Status failures are retryable only for
    /// 5xx and 429. Everything else is fatal.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Server { status } => (500..=599).contains(status) || *status == 429,
            ApiError::Client(_) => false,
        }
    }
}
