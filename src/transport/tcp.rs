//! TCP transport: ordered, reliable byte delivery for framed streams.
//!
//! Thin wrappers over `tokio::net` providing the send/receive contract the
//! framing layer depends on, plus framed convenience methods that move whole
//! [`TaggedStream`] messages.
//!
//! # Example
//!
//! ```ignore
//! use tagwire::transport::{Connection, Listener};
//! use tagwire::TaggedStream;
//!
//! let listener = Listener::bind("127.0.0.1:30100").await?;
//! let (mut server_conn, _peer) = listener.accept().await?;
//!
//! let mut stream = TaggedStream::new();
//! stream.push_u32(1).push_str("hello");
//! server_conn.send_stream(&stream).await?;
//! ```

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};

use crate::error::{Result, TagwireError};
use crate::framing::{receive_message, send_message};
use crate::protocol::DEFAULT_MAX_MESSAGE_SIZE;
use crate::stream::TaggedStream;

/// Listening socket accepting framed-stream connections.
pub struct Listener {
    listener: TcpListener,
}

impl Listener {
    /// Bind to the given address.
    pub async fn bind<A: ToSocketAddrs>(addr: A) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        tracing::debug!(addr = ?listener.local_addr(), "listener bound");
        Ok(Self { listener })
    }

    /// Accept a single connection.
    pub async fn accept(&self) -> Result<(Connection, SocketAddr)> {
        let (stream, peer) = self.listener.accept().await?;
        tracing::debug!(%peer, "accepted connection");
        Ok((Connection::from_stream(stream), peer))
    }

    /// Local address the listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }
}

/// A connected endpoint carrying framed tagged streams.
pub struct Connection {
    stream: TcpStream,
    max_message_size: u32,
}

impl Connection {
    /// Connect to a remote listener.
    pub async fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        tracing::debug!(peer = ?stream.peer_addr(), "connected");
        Ok(Self::from_stream(stream))
    }

    /// Wrap an already-connected TCP stream.
    pub fn from_stream(stream: TcpStream) -> Self {
        Self {
            stream,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }

    /// Set the maximum accepted message payload size for this connection.
    pub fn set_max_message_size(&mut self, max_message_size: u32) {
        self.max_message_size = max_message_size;
    }

    /// Send raw bytes, returning the number of bytes written.
    ///
    /// A single write call; may send fewer bytes than requested. Framed
    /// sends go through [`send_stream`](Self::send_stream).
    pub async fn send(&mut self, buf: &[u8]) -> Result<usize> {
        Ok(self.stream.write(buf).await?)
    }

    /// Receive raw bytes into `buf`, returning the number of bytes read.
    ///
    /// A zero-length read means the peer closed the connection and surfaces
    /// as [`TagwireError::PeerClosed`].
    pub async fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        let bytes = self.stream.read(buf).await?;
        if bytes == 0 && !buf.is_empty() {
            return Err(TagwireError::PeerClosed);
        }
        Ok(bytes)
    }

    /// Send a complete tagged stream as one framed message.
    pub async fn send_stream(&mut self, stream: &TaggedStream) -> Result<()> {
        send_message(&mut self.stream, stream.as_bytes()).await
    }

    /// Receive one framed message and load it into a fresh tagged stream.
    ///
    /// The full payload is reassembled before the stream is constructed, so
    /// the returned stream is always a complete message ready to decode.
    pub async fn receive_stream(&mut self) -> Result<TaggedStream> {
        let payload = receive_message(&mut self.stream, self.max_message_size).await?;
        Ok(TaggedStream::from_raw(&payload))
    }

    /// Address of the remote end.
    pub fn peer_addr(&self) -> Result<SocketAddr> {
        Ok(self.stream.peer_addr()?)
    }

    /// Local address of this end.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.stream.local_addr()?)
    }

    /// Shut down the write half, signalling end of stream to the peer.
    pub async fn shutdown(&mut self) -> Result<()> {
        self.stream.shutdown().await?;
        Ok(())
    }
}
