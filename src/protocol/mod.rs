//! Wire protocol: message framing header and chunk reassembly.

mod message_buffer;
mod wire_format;

pub use message_buffer::MessageBuffer;
pub use wire_format::{
    decode_length_prefix, encode_length_prefix, validate_message_size, DEFAULT_MAX_MESSAGE_SIZE,
    LENGTH_PREFIX_SIZE,
};
