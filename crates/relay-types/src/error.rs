use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ClientError {
    /// Client-side precondition failure. No request was issued.
    #[error("{0}")]
    Validation(String),

    /// Transport failure; the backend never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend responded with a non-success status or a structured
    /// error body. Carries the backend's own message.
    #[error("{0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JS interop error: {0}")]
    Interop(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Serialization(e.to_string())
    }
}
