use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for BON conversion
#[derive(Debug, Error)]
pub enum BonError {
    /// I/O errors on the source or the sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A record whose calendar fields do not form a valid date-time
    #[error("Malformed record #{index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
    /// File extension is not one of the BON family
    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),
    /// Input path has no extension to pick a layout from
    #[error("No file extension on {0:?}, cannot select a BON layout")]
    MissingExtension(PathBuf),
}

impl BonError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        BonError::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BonError>;
