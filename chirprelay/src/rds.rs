//! DPS message formatting for the RDS encoder
//!
//! The encoder takes one `DPS=<text>\n` line per update. The text part is
//! limited to 128 bytes; over-long track info is cut and ellipsized, and the
//! station suffix is only added when it still fits.

use chirpapi::Track;

/// Maximum DPS text length accepted by the encoder, in bytes
pub const DPS_BODY_MAX: usize = 128;

/// Station suffix appended when the text leaves room for it
pub const STATION_SUFFIX: &str = " on CHIRP Radio";

/// Byte offset where over-long text is cut before the ellipsis goes on.
/// 124 is the boundary the encoder has been fed since the Go announcer;
/// changing it would change every truncated message on air.
const TRUNCATE_AT: usize = 124;

/// Format the DPS line for a track.
///
/// The text is `'<title>' by <artist>`, truncated to fit the encoder budget,
/// with ` on CHIRP Radio` appended when there is room. The returned line
/// includes the `DPS=` prefix and the trailing newline.
pub fn dps_message(track: &Track) -> String {
    let mut body = format!("'{}' by {}", track.track, track.artist);

    if body.len() > DPS_BODY_MAX {
        body.truncate(floor_char_boundary(&body, TRUNCATE_AT));
        body.push_str("...");
    } else if body.len() + STATION_SUFFIX.len() < DPS_BODY_MAX {
        body.push_str(STATION_SUFFIX);
    }

    format!("DPS={}\n", body)
}

/// Largest index at or below `at` that falls on a char boundary.
///
/// The Go announcer sliced raw bytes; doing that here could split a
/// multi-byte character and panic, so the cut backs up to a boundary.
fn floor_char_boundary(s: &str, at: usize) -> usize {
    if at >= s.len() {
        return s.len();
    }
    let mut index = at;
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(artist: &str, title: &str) -> Track {
        Track {
            artist: artist.to_string(),
            track: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_basic_message() {
        let got = dps_message(&track("Regina Spektor", "Chemo Limo"));
        assert_eq!(got, "DPS='Chemo Limo' by Regina Spektor on CHIRP Radio\n");
    }

    #[test]
    fn test_long_message_drops_the_suffix() {
        // Base text fits the budget but the suffix would not
        let title = "Concerning the UFO sighting on blah blah blah blah blah \
                     blah blah blah blah blah blah blah blah blah";
        let got = dps_message(&track("Sufjean Stephens", title));
        assert_eq!(got, format!("DPS='{}' by Sufjean Stephens\n", title));
    }

    #[test]
    fn test_extra_long_message_is_truncated() {
        let title = "Concerning the UFO sighting on blah blah blah blah blah \
                     blah blah blah blah blah blah blah blah blah blah blah";
        let got = dps_message(&track("Sufjean Stephens", title));
        assert_eq!(got, format!("DPS='{}' by Sufjean ...\n", title));
    }

    #[test]
    fn test_line_never_exceeds_132_bytes() {
        let cases = [
            track("", ""),
            track("Regina Spektor", "Chemo Limo"),
            track(&"a".repeat(200), &"b".repeat(200)),
            track("Sigur Rós", &"Í".repeat(150)),
        ];
        for case in &cases {
            let line = dps_message(case);
            assert!(
                line.len() <= 132,
                "{} bytes for {:?}",
                line.len(),
                case.track
            );
            assert!(line.starts_with("DPS="));
            assert!(line.ends_with('\n'));
        }
    }

    #[test]
    fn test_truncated_body_is_at_most_127_bytes() {
        let line = dps_message(&track(&"x".repeat(100), &"y".repeat(100)));
        // strip "DPS=" and "\n"
        let body = &line[4..line.len() - 1];
        assert_eq!(body.len(), 127);
        assert!(body.ends_with("..."));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // é is two bytes; a blind byte cut at 124 would land mid-character
        let line = dps_message(&track("é", &"é".repeat(70)));
        assert!(line.len() <= 132);
        assert!(line.contains("..."));
        // Still valid UTF-8 by construction; make sure no replacement chars slipped in
        assert!(!line.contains('\u{FFFD}'));
    }

    #[test]
    fn test_empty_track_still_formats() {
        assert_eq!(dps_message(&Track::default()), "DPS='' by  on CHIRP Radio\n");
    }
}
