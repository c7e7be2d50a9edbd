use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no row for session {id}")]
    NotFound { id: Uuid },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("persistence backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("response parsing failed: {0}")]
    Decode(String),
}
