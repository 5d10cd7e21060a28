//! TCP sink for the RDS encoder
//!
//! Per tick: connect, write the DPS line, then wait briefly to see whether
//! the encoder objects. The encoder answers at most one line; the only reply
//! that means anything is the literal `NO`. Silence, EOF or any other text
//! counts as acceptance.

use crate::config::SinkTarget;
use crate::dispatch::TrackSink;
use crate::error::{Error, Result};
use crate::rds;
use chirpapi::Track;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Wait per response read attempt
const RESPONSE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Read attempts before giving up on a response (~1 second total)
const MAX_RESPONSE_ATTEMPTS: usize = 10;

/// Reply token meaning the encoder rejected the message
const REJECT_TOKEN: &str = "NO";

/// Connection-oriented sink speaking the RDS encoder's DPS protocol
#[derive(Debug, Clone)]
pub struct EncoderSink {
    target: SinkTarget,
    connect_timeout: Duration,
}

impl EncoderSink {
    pub fn new(target: SinkTarget, connect_timeout: Duration) -> Self {
        Self {
            target,
            connect_timeout,
        }
    }

    async fn connect(&self) -> Result<TcpStream> {
        let address = self.target.address();
        match timeout(self.connect_timeout, TcpStream::connect(&address)).await {
            Ok(Ok(stream)) => Ok(stream),
            Ok(Err(source)) => Err(Error::Dial {
                target: address,
                source,
            }),
            Err(_) => Err(Error::DialTimeout(address)),
        }
    }

    /// Read one response line with a bounded polled wait.
    ///
    /// Returns `None` when the encoder stays silent for the whole budget or
    /// closes without sending anything. A reply without a trailing newline
    /// still counts once the peer closes the connection.
    async fn read_response(stream: &mut TcpStream) -> Option<String> {
        let mut collected = Vec::new();
        let mut buf = [0u8; 256];

        for _ in 0..MAX_RESPONSE_ATTEMPTS {
            match timeout(RESPONSE_POLL_INTERVAL, stream.read(&mut buf)).await {
                Ok(Ok(0)) => break, // peer closed
                Ok(Ok(n)) => {
                    collected.extend_from_slice(&buf[..n]);
                    if collected.contains(&b'\n') {
                        break;
                    }
                }
                Ok(Err(err)) => {
                    debug!("RDS encoder response read failed: {}", err);
                    break;
                }
                Err(_) => {} // nothing yet, next attempt
            }
        }

        if collected.is_empty() {
            return None;
        }

        let text = String::from_utf8_lossy(&collected);
        Some(
            text.lines()
                .next()
                .unwrap_or_default()
                .trim_end()
                .to_string(),
        )
    }
}

#[async_trait::async_trait]
impl TrackSink for EncoderSink {
    fn name(&self) -> &str {
        "rds-encoder"
    }

    async fn send(&self, track: &Track) -> Result<()> {
        let message = rds::dps_message(track);

        let mut stream = self.connect().await?;
        stream.write_all(message.as_bytes()).await?;

        // Rejection is a warning, not a failure: the encoder keeps showing
        // its previous text and the tick completes.
        match Self::read_response(&mut stream).await {
            Some(reply) if reply == REJECT_TOKEN => {
                warn!("The RDS Encoder did not like the input {}", message);
            }
            Some(reply) => {
                debug!("RDS encoder replied: {}", reply);
            }
            None => {
                debug!("No reply from the RDS encoder, message assumed accepted");
            }
        }

        Ok(())
    }
}
