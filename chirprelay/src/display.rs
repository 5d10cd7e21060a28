//! UDP sink for the Prostream "now playing" display
//!
//! One datagram per tick, no response expected. The socket binds to an
//! ephemeral port and is dropped as soon as the datagram is out.

use crate::config::SinkTarget;
use crate::dispatch::TrackSink;
use crate::error::Result;
use chirpapi::Track;
use tokio::net::UdpSocket;
use tracing::debug;

/// Stream URL advertised alongside the track text
pub const STREAM_URL: &str = "http://www.chirpradio.org";

/// Fire-and-forget datagram sink speaking the Prostream track-info format
#[derive(Debug, Clone)]
pub struct DisplaySink {
    target: SinkTarget,
}

impl DisplaySink {
    pub fn new(target: SinkTarget) -> Self {
        Self { target }
    }

    /// Datagram payload, per the Prostream manual
    pub fn display_message(track: &Track) -> String {
        format!(
            "t={} - {} | u={}\r\n",
            track.track, track.artist, STREAM_URL
        )
    }
}

#[async_trait::async_trait]
impl TrackSink for DisplaySink {
    fn name(&self) -> &str {
        "prostream"
    }

    async fn send(&self, track: &Track) -> Result<()> {
        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        let payload = Self::display_message(track);

        socket
            .send_to(payload.as_bytes(), self.target.address())
            .await?;

        debug!("Sent track info to the Prostream at {}", self.target.address());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message_format() {
        let track = Track {
            artist: "Jeff Parker".to_string(),
            track: "Go Away".to_string(),
            ..Default::default()
        };
        assert_eq!(
            DisplaySink::display_message(&track),
            "t=Go Away - Jeff Parker | u=http://www.chirpradio.org\r\n"
        );
    }

    #[test]
    fn test_empty_track_message() {
        assert_eq!(
            DisplaySink::display_message(&Track::default()),
            "t= -  | u=http://www.chirpradio.org\r\n"
        );
    }
}
