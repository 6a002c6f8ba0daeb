//! Echo server - receives framed tagged streams and sends them back.
//!
//! Each client message is a complete framed `TaggedStream`; the server
//! echoes the raw stream bytes without decoding them, so the client gets
//! back exactly what it sent.
//!
//! # Running
//!
//! ```sh
//! cargo run --example echo_server [port]
//! cargo run --example echo_client [port]
//! ```

use tagwire::transport::Listener;

const DEFAULT_PORT: u16 = 30100;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let port = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u16>())
        .transpose()?
        .unwrap_or(DEFAULT_PORT);

    let listener = Listener::bind(("127.0.0.1", port)).await?;
    println!("Listening on port {}.", port);

    loop {
        println!("Waiting for clients...");
        let (mut conn, peer) = listener.accept().await?;
        println!("Client connected from {}", peer);

        // Echo messages back until the client disconnects.
        loop {
            let stream = match conn.receive_stream().await {
                Ok(stream) => stream,
                Err(tagwire::TagwireError::PeerClosed) => {
                    println!("Peer disconnected.");
                    break;
                }
                Err(e) => {
                    eprintln!("Receive error: {}", e);
                    break;
                }
            };

            println!("Message length: {} bytes, echoing...", stream.len());
            conn.send_stream(&stream).await?;
        }
    }
}
