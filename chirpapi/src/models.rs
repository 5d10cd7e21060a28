//! Data models for the CHIRP current-playlist feed
//!
//! The feed carries many more fields than the announcer needs (timestamps,
//! cover art URLs, release info). Only the fields consumed downstream are
//! modeled; serde ignores the rest.

use serde::{Deserialize, Serialize};

/// A single playlist entry as reported by the feed.
///
/// Every field defaults to the empty string. Downstream formatting relies on
/// that: an absent upstream field must surface as `""`, never as a missing
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    /// DJ on air when the track was played
    pub dj: String,
    /// Performing artist
    pub artist: String,
    /// Track title
    pub track: String,
    /// Record label
    pub label: String,
}

impl Track {
    /// True when the feed gave us nothing usable for this tick.
    pub fn is_silence(&self) -> bool {
        self.artist.is_empty() && self.track.is_empty()
    }
}

/// Top-level shape of the current-playlist feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Playlist {
    /// The track on air right now
    pub now_playing: Track,
    /// Recent history, most recent first
    pub recently_played: Vec<Track>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let track: Track = serde_json::from_str(r#"{"artist": "Zammuto"}"#).unwrap();
        assert_eq!(track.artist, "Zammuto");
        assert_eq!(track.track, "");
        assert_eq!(track.dj, "");
        assert_eq!(track.label, "");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let track: Track = serde_json::from_str(
            r#"{"artist": "Ty Segall", "track": "The Clock", "played_at_local_ts": 1411737750}"#,
        )
        .unwrap();
        assert_eq!(track.artist, "Ty Segall");
        assert_eq!(track.track, "The Clock");
    }

    #[test]
    fn test_is_silence() {
        assert!(Track::default().is_silence());
        assert!(!Track {
            artist: "Daft Punk".to_string(),
            ..Default::default()
        }
        .is_silence());
    }
}
