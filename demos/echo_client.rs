//! Echo client - sends framed tagged streams and verifies the echoes.
//!
//! Builds a stream of mixed values, sends it to the echo server, and
//! LIFO-decodes the echoed copy to confirm every value round-tripped.
//!
//! # Running
//!
//! ```sh
//! cargo run --example echo_server [port]
//! cargo run --example echo_client [port]
//! ```

use tagwire::transport::Connection;
use tagwire::TaggedStream;

const DEFAULT_PORT: u16 = 30100;
const MESSAGE_COUNT: u32 = 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let port = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u16>())
        .transpose()?
        .unwrap_or(DEFAULT_PORT);

    let mut conn = Connection::connect(("127.0.0.1", port)).await?;
    println!("Connected to port {}.", port);

    for seq in 0..MESSAGE_COUNT {
        let text = format!("echo message {}", seq);

        let mut outbound = TaggedStream::new();
        outbound.push_u32(seq).push_i64(-1).push_str(&text);
        conn.send_stream(&outbound).await?;

        // Values come back most-recent-first.
        let mut inbound = conn.receive_stream().await?;
        assert_eq!(inbound.pop_string()?, text);
        assert_eq!(inbound.pop_i64()?, -1);
        assert_eq!(inbound.pop_u32()?, seq);
        assert!(inbound.is_empty());

        println!("Message {} echoed intact ({} bytes).", seq, outbound.len());
    }

    conn.shutdown().await?;
    println!("Done.");
    Ok(())
}
