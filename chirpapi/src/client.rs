//! HTTP client for the CHIRP current-playlist API
//!
//! The client is stateless: one GET per poll, no caching, no connection
//! affinity beyond what reqwest pools internally.

use crate::error::{Error, Result};
use crate::models::{Playlist, Track};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Query tag identifying announcer traffic to the CHIRP API
pub const SRC_TAG: &str = "chirp-current-track-announcer";

/// Default timeout for feed requests (10 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "chirp-announcer/0.1 (chirpapi)";

/// CHIRP current-playlist HTTP client
#[derive(Debug, Clone)]
pub struct ChirpClient {
    client: Client,
    feed_url: Url,
}

impl ChirpClient {
    /// Create a client for the given feed endpoint with default settings
    pub fn new(feed_url: &str) -> Result<Self> {
        Self::builder().feed_url(feed_url).build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Get the configured feed URL (untagged)
    pub fn feed_url(&self) -> &Url {
        &self.feed_url
    }

    /// The feed URL with the `src` tag appended.
    ///
    /// The tag is added exactly once per request, whether or not the
    /// configured URL already carries a query string.
    pub fn tagged_url(&self) -> Url {
        tag_feed_url(&self.feed_url)
    }

    /// Fetch and decode the whole current-playlist feed
    pub async fn current_playlist(&self) -> Result<Playlist> {
        let url = self.tagged_url();
        debug!("About to GET {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::api(format!(
                "feed returned status: {}",
                response.status()
            )));
        }

        let playlist: Playlist = response.json().await?;

        debug!("Looks like {} is playing", playlist.now_playing.track);

        Ok(playlist)
    }

    /// Fetch only the track on air right now
    pub async fn now_playing(&self) -> Result<Track> {
        let playlist = self.current_playlist().await?;
        Ok(playlist.now_playing)
    }
}

/// Append the `src` tag to a feed URL, preserving any existing query
pub fn tag_feed_url(url: &Url) -> Url {
    let mut tagged = url.clone();
    tagged.query_pairs_mut().append_pair("src", SRC_TAG);
    tagged
}

/// Builder for configuring a ChirpClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    feed_url: Option<String>,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            feed_url: None,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    ///
    /// Useful for sharing connection pools or custom proxy settings
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the feed endpoint URL (required)
    pub fn feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ChirpClient> {
        let raw_url = self
            .feed_url
            .ok_or_else(|| Error::other("No feed URL configured"))?;
        let feed_url = Url::parse(&raw_url)?;

        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout)
                .build()?,
        };

        Ok(ChirpClient { client, feed_url })
    }
}
