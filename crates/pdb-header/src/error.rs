//! Error types for PDB header operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing a PDB header.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The line source failed in the middle of the header block.
    #[error("read failed at line {line_number}: {source}")]
    ReadFailed {
        line_number: usize,
        #[source]
        source: std::io::Error,
    },

    /// Binary stream went bad before a declared element count was exhausted.
    #[error("read failure in {section}, {remaining} to go")]
    Truncated {
        section: &'static str,
        remaining: u64,
    },

    /// A fixed binary field could not be decoded.
    #[error("failed to read binary field {field}: {source}")]
    BinaryField {
        field: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Binary string payload is not valid UTF-8.
    #[error("binary field {field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },

    /// Remark id too wide for columns 8-10.
    #[error("remark id {id} does not fit in 3 columns")]
    RemarkIdOutOfRange { id: u32 },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for header operations.
pub type Result<T> = std::result::Result<T, HeaderError>;

impl HeaderError {
    /// Create a Truncated error.
    pub fn truncated(section: &'static str, remaining: u64) -> Self {
        Self::Truncated { section, remaining }
    }

    /// Create a ReadFailed error.
    pub fn read_failed(line_number: usize, source: std::io::Error) -> Self {
        Self::ReadFailed {
            line_number,
            source,
        }
    }

    /// Create a BinaryField error, folding invalid UTF-8 into its own variant.
    pub fn binary_field(field: &'static str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::InvalidData {
            Self::InvalidUtf8 { field }
        } else {
            Self::BinaryField { field, source }
        }
    }

    /// Map an `open` failure on `path`, keeping not-found distinct.
    pub(crate) fn from_open(error: std::io::Error, path: &std::path::Path) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(error)
        }
    }

    /// Whether this error leaves the header in a partially populated state.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ReadFailed { .. }
                | Self::Truncated { .. }
                | Self::BinaryField { .. }
                | Self::InvalidUtf8 { .. }
        )
    }
}
