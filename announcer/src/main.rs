//! CHIRP current-track announcer
//!
//! Little service that runs at the station: polls the CHIRP current-playlist
//! API and relays whatever is on air to the Prostream display device (UDP)
//! and the RDS encoder (TCP).

use anyhow::Context;
use chirpapi::ChirpClient;
use chirprelay::{RelayConfig, SinkTarget};
use clap::Parser;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Report the current track to the Prostream and the RDS encoder
#[derive(Debug, Parser)]
#[command(name = "announcer", version, about)]
struct Cli {
    /// URL of the CHIRP current_playlist API endpoint
    #[arg(long)]
    chirp: String,

    /// IP address or hostname of the Prostream device
    #[arg(long)]
    prostream: Option<String>,

    /// Port of the Prostream track information receiver
    #[arg(long, default_value_t = 9000)]
    port: u16,

    /// IP address or hostname of the RDS encoder
    #[arg(long)]
    rds: Option<String>,

    /// Port of the RDS encoder
    #[arg(long, default_value_t = 5000)]
    rds_port: u16,

    /// Seconds between polls
    #[arg(long, default_value_t = 30)]
    interval: u64,

    /// Seconds to wait for a sink connection before giving up on the tick
    #[arg(long, default_value_t = 3)]
    connect_timeout: u64,

    /// Run in verbose mode
    #[arg(long)]
    verbose: bool,

    /// Run in test mode: fetch the track but send nothing
    #[arg(long)]
    test: bool,

    /// Run once and then quit
    #[arg(long)]
    run_once: bool,
}

impl Cli {
    fn relay_config(&self) -> RelayConfig {
        RelayConfig {
            display: self
                .prostream
                .clone()
                .map(|host| SinkTarget::new(host, self.port)),
            encoder: self
                .rds
                .clone()
                .map(|host| SinkTarget::new(host, self.rds_port)),
            poll_interval: Duration::from_secs(self.interval),
            connect_timeout: Duration::from_secs(self.connect_timeout),
            no_send: self.test,
            run_once: self.run_once,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let client = ChirpClient::new(&cli.chirp).context("Invalid CHIRP API endpoint")?;
    let config = cli.relay_config();

    info!(
        "Polling {} every {}s",
        cli.chirp,
        config.poll_interval.as_secs()
    );
    chirprelay::poll::run(&client, &config).await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_build_the_relay_config() {
        let cli = Cli::parse_from([
            "announcer",
            "--chirp",
            "http://example.com/api/current_playlist",
            "--prostream",
            "10.0.1.20",
            "--rds",
            "10.0.1.21",
            "--rds-port",
            "5001",
            "--interval",
            "10",
            "--run-once",
        ]);
        let config = cli.relay_config();

        assert_eq!(config.display, Some(SinkTarget::new("10.0.1.20", 9000)));
        assert_eq!(config.encoder, Some(SinkTarget::new("10.0.1.21", 5001)));
        assert_eq!(config.poll_interval, Duration::from_secs(10));
        assert!(config.run_once);
        assert!(!config.no_send);
    }

    #[test]
    fn test_sinks_default_to_unconfigured() {
        let cli = Cli::parse_from(["announcer", "--chirp", "http://example.com/feed"]);
        let config = cli.relay_config();

        assert!(config.display.is_none());
        assert!(config.encoder.is_none());
        assert_eq!(config.poll_interval, Duration::from_secs(30));
    }
}
