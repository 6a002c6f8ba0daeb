//! # tagwire
//!
//! Self-describing tagged value stream with length-prefixed framing.
//!
//! A [`TaggedStream`] serializes primitive scalars and byte strings into a
//! single growable buffer. Every value is bracketed by a one-byte type
//! marker — written before and after the payload — so the decoder can
//! verify each value against what was written. Multi-byte integers travel
//! in network byte order (big-endian) regardless of host order.
//!
//! Decoding consumes values from the buffer **tail**: values come back in
//! the reverse of the order they were pushed (LIFO). See [`stream`] for the
//! full contract.
//!
//! ## Architecture
//!
//! - [`stream`] — the encode/decode engine (synchronous, in-memory)
//! - [`protocol`] — 4-byte length-prefix framing and chunk reassembly
//! - [`framing`] — framed async send/receive over any byte transport
//! - [`transport`] — TCP listener/connection wrappers
//!
//! ## Example
//!
//! ```
//! use tagwire::TaggedStream;
//!
//! let mut stream = TaggedStream::new();
//! stream.push_i16(21845).push_str("This is a string");
//!
//! assert_eq!(stream.pop_string().unwrap(), "This is a string");
//! assert_eq!(stream.pop_i16().unwrap(), 21845);
//! assert!(stream.is_empty());
//! ```

pub mod error;
pub mod framing;
pub mod protocol;
pub mod stream;
pub mod transport;

pub use error::{Result, TagwireError};
pub use stream::{TaggedStream, TypeMarker};
