//! Fan-out relay core for the CHIRP current-track announcer
//!
//! One poll tick fetches the current track from the feed and relays it to the
//! configured downstream devices:
//!
//! - the **Prostream** display device, over a fire-and-forget UDP datagram
//! - the **RDS encoder**, over TCP with a short accept/reject handshake
//!
//! Each sink owns its protocol encoding and its socket. Sinks are dispatched
//! concurrently and joined before the next tick; a failing sink is logged and
//! never takes down the other sink or the loop.
//!
//! # Example
//!
//! ```no_run
//! use chirpapi::ChirpClient;
//! use chirprelay::{RelayConfig, SinkTarget};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ChirpClient::new("https://chirpradio.appspot.com/api/current_playlist")?;
//!     let config = RelayConfig {
//!         display: Some(SinkTarget::new("10.0.1.20", 9000)),
//!         ..Default::default()
//!     };
//!
//!     chirprelay::poll::run(&client, &config).await;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod display;
pub mod encoder;
pub mod error;
pub mod poll;
pub mod rds;

// Re-exports
pub use config::{RelayConfig, SinkTarget};
pub use dispatch::{dispatch_all, TrackSink};
pub use display::DisplaySink;
pub use encoder::EncoderSink;
pub use error::{Error, Result};
pub use rds::dps_message;
