use thiserror::Error;

#[derive(Error, Debug)]
pub enum VideoIdError {
    #[error("{function} expects a string, got {received}")]
    InvalidInput {
        function: &'static str,
        received: &'static str,
    },

    #[error("Failed to serialize JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VideoIdError>;
