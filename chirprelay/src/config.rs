//! Relay configuration
//!
//! Built once at startup and passed by reference into the poll loop. Nothing
//! in this crate reads flags or ambient state.

use std::time::Duration;

/// Default seconds between poll ticks
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Default connect timeout for stream sinks (3 seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 3;

/// Network target for one downstream sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkTarget {
    pub host: String,
    pub port: u16,
}

impl SinkTarget {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// An empty host means the sink was never configured.
    pub fn is_configured(&self) -> bool {
        !self.host.is_empty()
    }

    /// Dialable `host:port` string, with IPv6 hosts bracketed
    pub fn address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// Immutable relay configuration
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Prostream display device (UDP). `None` disables the sink.
    pub display: Option<SinkTarget>,
    /// RDS encoder (TCP). `None` disables the sink.
    pub encoder: Option<SinkTarget>,
    /// Time between poll ticks
    pub poll_interval: Duration,
    /// Connect timeout for stream sinks. The original tool dialed without
    /// one, so a hung encoder could stall a tick indefinitely; here the
    /// timeout is explicit and configurable.
    pub connect_timeout: Duration,
    /// Test mode: fetch the track but skip dispatch entirely
    pub no_send: bool,
    /// Run one tick and stop
    pub run_once: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            display: None,
            encoder: None,
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            no_send: false,
            run_once: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_formatting() {
        assert_eq!(SinkTarget::new("10.0.1.20", 9000).address(), "10.0.1.20:9000");
        assert_eq!(SinkTarget::new("::1", 9000).address(), "[::1]:9000");
    }

    #[test]
    fn test_empty_host_is_unconfigured() {
        assert!(!SinkTarget::new("", 9000).is_configured());
        assert!(SinkTarget::new("prostream.local", 9000).is_configured());
    }
}
