use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlockstatError {
    #[error("{0} delimiter must contain at least one character")]
    EmptyDelimiter(&'static str),

    #[error("Failed to serialize statistics: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
