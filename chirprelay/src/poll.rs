//! The poll loop: fetch the current track, fan it out, sleep, repeat

use crate::config::RelayConfig;
use crate::dispatch::{self, TrackSink};
use crate::display::DisplaySink;
use crate::encoder::EncoderSink;
use chirpapi::{ChirpClient, Track};
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Build the active sink set from the configuration.
///
/// A sink with no target (or an empty host) is skipped outright: never
/// dialed, never reported as an error.
pub fn active_sinks(config: &RelayConfig) -> Vec<Arc<dyn TrackSink>> {
    let mut sinks: Vec<Arc<dyn TrackSink>> = Vec::new();

    if let Some(target) = config.display.as_ref().filter(|t| t.is_configured()) {
        sinks.push(Arc::new(DisplaySink::new(target.clone())));
    }
    if let Some(target) = config.encoder.as_ref().filter(|t| t.is_configured()) {
        sinks.push(Arc::new(EncoderSink::new(
            target.clone(),
            config.connect_timeout,
        )));
    }

    sinks
}

/// Run the announcer loop until `run_once` stops it.
///
/// A fetch failure yields an empty track for that tick, which is dispatched
/// like any other: the downstream displays go blank instead of freezing on
/// the last good title. There is no retry or backoff; the next tick simply
/// fetches again.
pub async fn run(client: &ChirpClient, config: &RelayConfig) {
    let sinks = active_sinks(config);
    if sinks.is_empty() && !config.no_send {
        warn!("No sinks configured; track updates will go nowhere");
    }

    loop {
        let track = match client.now_playing().await {
            Ok(track) => track,
            Err(err) => {
                warn!("Error fetching the current track: {}", err);
                Track::default()
            }
        };

        if track.is_silence() {
            debug!("Feed reported no current track");
        }

        if config.no_send {
            debug!("Test mode: skipping dispatch");
        } else {
            dispatch::dispatch_all(&track, &sinks).await;
        }

        if config.run_once {
            break;
        }
        sleep(config.poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SinkTarget;

    #[test]
    fn test_no_targets_means_no_sinks() {
        assert!(active_sinks(&RelayConfig::default()).is_empty());
    }

    #[test]
    fn test_empty_host_is_skipped() {
        let config = RelayConfig {
            display: Some(SinkTarget::new("", 9000)),
            encoder: Some(SinkTarget::new("", 5000)),
            ..Default::default()
        };
        assert!(active_sinks(&config).is_empty());
    }

    #[test]
    fn test_both_sinks_active() {
        let config = RelayConfig {
            display: Some(SinkTarget::new("10.0.1.20", 9000)),
            encoder: Some(SinkTarget::new("10.0.1.21", 5000)),
            ..Default::default()
        };
        let sinks = active_sinks(&config);
        assert_eq!(sinks.len(), 2);
        let names: Vec<&str> = sinks.iter().map(|s| s.name()).collect();
        assert!(names.contains(&"prostream"));
        assert!(names.contains(&"rds-encoder"));
    }
}
