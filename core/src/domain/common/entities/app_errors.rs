use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Missing or malformed caller input. The message is safe to show to the caller.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidHistory(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("{0}")]
    ParseError(String),

    #[error("{0}")]
    ShapeError(String),

    #[error("Received empty response from model")]
    EmptyResponse,

    #[error("AI service did not answer in time")]
    Timeout,

    #[error("Internal server error")]
    InternalServerError,
}
