//! Message buffer for accumulating partial reads.
//!
//! Uses `bytes::BytesMut` for buffer management. Implements a state machine
//! for handling fragmented messages:
//! - `WaitingForLength`: need the 4-byte length prefix
//! - `WaitingForPayload`: prefix parsed, need N more payload bytes
//!
//! Chunked reassembly happens here so that the decoder only ever sees
//! complete messages.
//!
//! # Example
//!
//! ```
//! use tagwire::protocol::MessageBuffer;
//!
//! let mut buffer = MessageBuffer::new();
//!
//! // Data arrives in arbitrary chunks from the transport.
//! let messages = buffer.push(&[0, 0, 0, 2, b'h', b'i']).unwrap();
//! assert_eq!(messages.len(), 1);
//! assert_eq!(&messages[0][..], b"hi");
//! ```

use bytes::{Bytes, BytesMut};

use super::wire_format::{
    decode_length_prefix, validate_message_size, DEFAULT_MAX_MESSAGE_SIZE, LENGTH_PREFIX_SIZE,
};
use crate::error::Result;

/// State machine for message parsing.
#[derive(Debug, Clone)]
enum State {
    /// Waiting for a complete length prefix (need 4 bytes).
    WaitingForLength,
    /// Prefix parsed, waiting for payload bytes.
    WaitingForPayload { remaining: u32 },
}

/// Buffer for accumulating incoming bytes and extracting complete messages.
///
/// All data is stored in a single `BytesMut` buffer; complete payloads are
/// split off without copying.
pub struct MessageBuffer {
    /// Accumulated bytes from transport reads.
    buffer: BytesMut,
    /// Current parsing state.
    state: State,
    /// Maximum allowed payload size.
    max_message_size: u32,
}

impl MessageBuffer {
    /// Create a new message buffer with default settings.
    pub fn new() -> Self {
        Self::with_max_message_size(DEFAULT_MAX_MESSAGE_SIZE)
    }

    /// Create a new message buffer with a custom max payload size.
    pub fn with_max_message_size(max_message_size: u32) -> Self {
        Self {
            buffer: BytesMut::with_capacity(8 * 1024),
            state: State::WaitingForLength,
            max_message_size,
        }
    }

    /// Push data into the buffer and extract all complete messages.
    ///
    /// Returns the complete message payloads found so far; partial data is
    /// buffered internally for the next push.
    ///
    /// # Errors
    ///
    /// Returns a protocol error if a claimed payload length exceeds the
    /// configured maximum. The oversized payload is never buffered.
    pub fn push(&mut self, data: &[u8]) -> Result<Vec<Bytes>> {
        self.buffer.extend_from_slice(data);

        let mut messages = Vec::new();
        while let Some(payload) = self.try_extract_one()? {
            messages.push(payload);
        }
        Ok(messages)
    }

    /// Try to extract a single complete payload from the buffer.
    fn try_extract_one(&mut self) -> Result<Option<Bytes>> {
        match &self.state {
            State::WaitingForLength => {
                let Some(length) = decode_length_prefix(&self.buffer) else {
                    return Ok(None);
                };
                validate_message_size(length, self.max_message_size)?;

                let _ = self.buffer.split_to(LENGTH_PREFIX_SIZE);

                if length == 0 {
                    return Ok(Some(Bytes::new()));
                }

                self.state = State::WaitingForPayload { remaining: length };
                self.try_extract_one()
            }

            State::WaitingForPayload { remaining } => {
                let remaining = *remaining as usize;
                if self.buffer.len() < remaining {
                    return Ok(None);
                }

                let payload = self.buffer.split_to(remaining).freeze();
                self.state = State::WaitingForLength;
                Ok(Some(payload))
            }
        }
    }

    /// Number of buffered bytes not yet part of a complete message.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear the buffer and reset state.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.state = State::WaitingForLength;
    }
}

impl Default for MessageBuffer {
    fn default() -> Self {
        Self::new()
    }
}
