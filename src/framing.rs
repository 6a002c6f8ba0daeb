//! Framed message send/receive over an async byte transport.
//!
//! A message is a 4-byte big-endian length prefix followed by exactly that
//! many payload bytes. [`receive_message`] loops until the full payload has
//! arrived, so callers always get a complete message — the tagged stream
//! decoder never operates on a partial one.
//!
//! An orderly close by the peer (a zero-length read at or inside a message)
//! surfaces as [`TagwireError::PeerClosed`]; transport failures surface as
//! [`TagwireError::Io`] carrying the OS error.

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{Result, TagwireError};
use crate::protocol::{encode_length_prefix, validate_message_size, LENGTH_PREFIX_SIZE};

/// Write one framed message: length prefix, then the payload, then flush.
pub async fn send_message<W>(writer: &mut W, payload: &[u8]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let length = u32::try_from(payload.len()).map_err(|_| {
        TagwireError::Protocol(format!(
            "message size {} exceeds the 4-byte length prefix",
            payload.len()
        ))
    })?;

    writer.write_all(&encode_length_prefix(length)).await?;
    writer.write_all(payload).await?;
    writer.flush().await?;

    tracing::debug!(length, "sent framed message");
    Ok(())
}

/// Read one framed message, looping over partial reads until complete.
///
/// Validates the claimed length against `max_message_size` before reading
/// the payload.
pub async fn receive_message<R>(reader: &mut R, max_message_size: u32) -> Result<Bytes>
where
    R: AsyncRead + Unpin,
{
    let mut prefix = [0u8; LENGTH_PREFIX_SIZE];
    reader.read_exact(&mut prefix).await.map_err(map_closed)?;

    let length = u32::from_be_bytes(prefix);
    validate_message_size(length, max_message_size)?;

    let mut payload = vec![0u8; length as usize];
    reader.read_exact(&mut payload).await.map_err(map_closed)?;

    tracing::debug!(length, "received framed message");
    Ok(Bytes::from(payload))
}

/// Map an end-of-stream read to the peer-closed condition.
fn map_closed(err: std::io::Error) -> TagwireError {
    if err.kind() == std::io::ErrorKind::UnexpectedEof {
        TagwireError::PeerClosed
    } else {
        TagwireError::Io(err)
    }
}
