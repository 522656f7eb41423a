//! HTTP protocol implementation.
//!
//! Just enough HTTP/1.x to serve one request per connection: the request line
//! is parsed, headers and bodies are ignored, and the connection is closed
//! after the response.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Extracts the request line from the bytes read so far
//! - **`request`**: Request line representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request line
//!        └──────┬──────┘
//!               │
//!       ┌───────┴────────┐
//!       ▼                ▼
//!  ┌──────────┐    ┌───────────┐
//!  │  Parsed  │    │  Invalid  │ ← empty, malformed or too large: 400
//!  └────┬─────┘    └─────┬─────┘
//!       │ GET: resolve   │
//!       │ other: 501     │
//!       └───────┬────────┘
//!               ▼
//!        ┌──────────────┐
//!        │  Dispatched  │ ← Send response to client
//!        └──────┬───────┘
//!               ▼
//!        ┌──────────────┐
//!        │    Closed    │
//!        └──────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use webserv::config::Config;
//! use webserv::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(Config::default());
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, peer) = listener.accept().await?;
//!         let config = Arc::clone(&config);
//!         tokio::spawn(async move {
//!             if let Err(e) = Connection::new(socket, peer, config).run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
