//! CHIRP Radio current-playlist client
//!
//! This crate provides a small client for the CHIRP Radio public
//! current-playlist API. It fetches the feed, decodes the JSON payload and
//! hands back the currently playing track.
//!
//! Every request is tagged with a fixed `src` query parameter so the station
//! can tell announcer traffic apart from listener traffic.
//!
//! # Example
//!
//! ```no_run
//! use chirpapi::ChirpClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ChirpClient::new("https://chirpradio.appspot.com/api/current_playlist")?;
//!
//!     let track = client.now_playing().await?;
//!     println!("{} - {}", track.track, track.artist);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;

// Re-exports
pub use client::{ChirpClient, ClientBuilder, SRC_TAG};
pub use error::{Error, Result};
pub use models::{Playlist, Track};
