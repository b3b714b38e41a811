//! Error types for request encoding and decoding

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors that can occur when converting a request to or from JSON
#[derive(Debug, Error)]
pub enum CodecError {
    /// The request could not be rendered as JSON text
    #[error("Failed to encode request: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The input was not a well-formed request document
    #[error("Failed to decode request: {0}")]
    Decoding(#[source] serde_json::Error),

    /// Reading or writing the underlying stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// Check if this error came from encoding
    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding(_))
    }

    /// Check if this error came from decoding
    pub fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding(_))
    }

    /// Check if this error came from the underlying stream
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Line (1-based) at which decoding failed, if known
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Decoding(err) if err.line() > 0 => Some(err.line()),
            _ => None,
        }
    }

    /// Column (1-based) at which decoding failed, if known
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::Decoding(err) if err.column() > 0 => Some(err.column()),
            _ => None,
        }
    }

    /// Classify a serde_json error raised while decoding
    ///
    /// serde_json reports stream failures through its own error type; those are
    /// surfaced as [`CodecError::Io`] so callers can tell a broken pipe from bad input.
    pub(crate) fn from_decode(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.into())
        } else {
            Self::Decoding(err)
        }
    }

    /// Classify a serde_json error raised while encoding
    pub(crate) fn from_encode(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.into())
        } else {
            Self::Encoding(err)
        }
    }
}
