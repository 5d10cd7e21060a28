//! Error types for the relay sinks

/// Result type alias for relay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors a sink can report back to the dispatcher.
///
/// None of these abort the poll loop; the dispatcher logs them per sink and
/// moves on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error while writing to or reading from a sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Could not open a connection to a configured sink
    #[error("failed to connect to {target}: {source}")]
    Dial {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// Connection attempt exceeded the configured timeout
    #[error("connect to {0} timed out")]
    DialTimeout(String),
}
