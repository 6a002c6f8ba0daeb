//! Transport layer: TCP listener and connection wrappers.

mod tcp;

pub use tcp::{Connection, Listener};
