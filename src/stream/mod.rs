//! Tagged value stream: type markers and the encode/decode engine.
//!
//! The engine is a synchronous, in-memory value object — it performs no I/O
//! and holds no resource beyond its buffer. Transport and framing live in
//! [`crate::transport`] and [`crate::framing`].

mod marker;
mod tagged;

pub use marker::TypeMarker;
pub use tagged::TaggedStream;
