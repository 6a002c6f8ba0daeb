//! Error types for tagwire.

use thiserror::Error;

use crate::stream::TypeMarker;

/// Main error type for all tagwire operations.
#[derive(Debug, Error)]
pub enum TagwireError {
    /// The tag bytes at the decode position do not match the requested type.
    ///
    /// The buffer is left untouched; the caller may retry with the correct
    /// type or treat the stream as corrupt.
    #[error("type mismatch: expected {expected:?}, found tag {found:#04x}")]
    TypeMismatch {
        /// The marker the decode operation was asked for.
        expected: TypeMarker,
        /// The tag byte actually present at the buffer tail.
        found: u8,
    },

    /// The buffer holds fewer bytes than the minimum record size for the
    /// requested operation.
    #[error("truncated stream: need {needed} bytes, have {available}")]
    Truncated {
        /// Minimum record size for the requested type.
        needed: usize,
        /// Bytes currently in the buffer.
        available: usize,
    },

    /// A string record's embedded length field exceeds the bytes actually
    /// available before the leading tag.
    #[error("invalid length field: {length} bytes claimed, {available} available")]
    InvalidLength {
        /// Length claimed by the record's length field.
        length: usize,
        /// Bytes available in the buffer ahead of the record's fixed parts.
        available: usize,
    },

    /// Decoded string data is not valid UTF-8.
    ///
    /// Raised only by [`TaggedStream::pop_string`](crate::TaggedStream::pop_string);
    /// use [`pop_bytes`](crate::TaggedStream::pop_bytes) for byte-exact decoding.
    #[error("decoded string is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Framing violation (e.g. message length exceeds the configured maximum).
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The remote end closed the connection.
    #[error("peer closed connection")]
    PeerClosed,

    /// I/O error during transport operations, carrying the OS error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using TagwireError.
pub type Result<T> = std::result::Result<T, TagwireError>;
