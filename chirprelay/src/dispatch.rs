//! Fan-out of one track snapshot to the configured sinks

use crate::error::Result;
use chirpapi::Track;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, error};

/// A downstream receiver of track updates.
///
/// Implementations own their protocol encoding and their socket for the
/// duration of one `send`. Failures come back through the `Result`; the
/// dispatcher decides what to do with them.
#[async_trait::async_trait]
pub trait TrackSink: Send + Sync {
    /// Short sink name used in logs
    fn name(&self) -> &str;

    /// Deliver one track snapshot
    async fn send(&self, track: &Track) -> Result<()>;
}

/// Send one snapshot to every sink concurrently and wait for all of them.
///
/// Each sink gets its own clone of the snapshot and runs as its own task;
/// there is no ordering between deliveries. A failing sink is logged here
/// and never aborts the others.
pub async fn dispatch_all(track: &Track, sinks: &[Arc<dyn TrackSink>]) {
    let mut tasks = JoinSet::new();

    for sink in sinks {
        let sink = Arc::clone(sink);
        let track = track.clone();
        tasks.spawn(async move {
            let name = sink.name().to_string();
            (name, sink.send(&track).await)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((name, Ok(()))) => debug!("{} delivery done", name),
            Ok((name, Err(err))) => error!("Error sending to the {} sink: {}", name, err),
            Err(err) => error!("Sink task failed to complete: {}", err),
        }
    }
}
