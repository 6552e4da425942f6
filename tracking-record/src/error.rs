//! Tracking record error types

use std::io;
use std::path::PathBuf;

use crate::codec::Field;

/// Errors produced while converting, reading or decoding tracking records
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Source or destination file could not be opened
    #[error("could not open {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading or writing an already open stream failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text input ended before the field's token
    #[error("missing token for {}", .field.name())]
    MissingToken { field: Field },

    /// Text token could not be parsed as the field's numeric type
    #[error("invalid token {token:?} for {}: {reason}", .field.name())]
    InvalidToken {
        field: Field,
        token: String,
        reason: String,
    },

    /// Buffer too short for the next field read
    #[error(
        "insufficient data for {}: need {needed} bytes at offset {offset}, buffer has {available}",
        .field.name()
    )]
    InsufficientData {
        field: Field,
        offset: usize,
        needed: usize,
        available: usize,
    },
}

impl RecordError {
    /// Wrap an open failure with the path that caused it
    pub(crate) fn file_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RecordError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// True for the truncated-buffer condition
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, RecordError::InsufficientData { .. })
    }
}
