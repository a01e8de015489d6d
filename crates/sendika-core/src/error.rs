use thiserror::Error;

/// Failures of the remote notification feed.
///
/// These are the only errors surfaced to callers: persisted-store failures
/// are recovered locally (the overlay degrades to "nothing marked read", the
/// count to its last durable value) and never propagate.
#[derive(Debug, Clone, Error)]
pub enum FeedError {
    #[error("network error: {message}")]
    Network { message: String },
    #[error("server error (status {status}): {message}")]
    Server { status: u16, message: String },
}

impl FeedError {
    pub fn network(message: impl Into<String>) -> Self {
        FeedError::Network {
            message: message.into(),
        }
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        FeedError::Server {
            status,
            message: message.into(),
        }
    }
}
