use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SiftError>;

#[derive(Debug, Error)]
pub enum SiftError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("match offsets must be strictly increasing: {offset} follows {previous}")]
    InvalidOffsets { previous: usize, offset: usize },

    #[error("session not found: {id}")]
    SessionNotFound { id: String },

    #[error("required path does not exist: {path}")]
    MissingPath { path: PathBuf },
}

impl SiftError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } | Self::InvalidOffsets { .. } => 2,
            Self::SessionNotFound { .. } | Self::MissingPath { .. } => 3,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Reject offsets that are not strictly increasing.
pub fn validate_offsets(offsets: &[usize]) -> Result<()> {
    match offsets.windows(2).find(|pair| pair[1] <= pair[0]) {
        Some(pair) => Err(SiftError::InvalidOffsets {
            previous: pair[0],
            offset: pair[1],
        }),
        None => Ok(()),
    }
}
