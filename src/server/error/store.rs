use thiserror::Error;

/// Failure reading or writing template documents.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Template store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid template document: {0}")]
    Json(#[from] serde_json::Error),
}
