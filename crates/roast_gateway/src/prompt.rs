//! Roast prompt construction
//!
//! Pure string templating: persona text plus a 1-indexed track listing.
//! Same input sequence, same output bytes.

use spotify_client::TrackSummary;

/// Build the generation prompt for a listener's top tracks, in input order.
pub fn build_roast_prompt(tracks: &[TrackSummary]) -> String {
    let list = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            format!(
                "{}. \"{}\" by {} (popularity: {}/100)",
                i + 1,
                track.name,
                track.artists,
                track.popularity
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a savage, witty comedian who roasts people's music taste.\n\
         \n\
         Here are this person's top {count} Spotify tracks:\n\
         {list}\n\
         \n\
         Based on their music taste, write a brutal but funny roast in 3-5 sentences. \
         Write the roast in Hinglish; these are Indian songs and Indian listeners. \
         Be creative, reference specific songs/artists from their list, and make it personal. \
         Keep it playful and not actually mean or offensive.",
        count = tracks.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(name: &str, artists: &str, popularity: u32) -> TrackSummary {
        TrackSummary {
            name: name.to_string(),
            artists: artists.to_string(),
            album: "Y".to_string(),
            popularity,
        }
    }

    #[test]
    fn lines_are_one_indexed_in_input_order() {
        let prompt = build_roast_prompt(&[track("A", "X", 50), track("B", "X, Z", 7)]);

        assert!(prompt.contains("1. \"A\" by X (popularity: 50/100)"));
        assert!(prompt.contains("2. \"B\" by X, Z (popularity: 7/100)"));
        assert!(prompt.contains("top 2 Spotify tracks"));
    }

    #[test]
    fn output_is_deterministic() {
        let tracks = vec![track("A", "X", 50), track("B", "Z", 80)];
        assert_eq!(build_roast_prompt(&tracks), build_roast_prompt(&tracks));
    }

    #[test]
    fn persona_and_tone_are_fixed() {
        let prompt = build_roast_prompt(&[track("A", "X", 50)]);

        assert!(prompt.starts_with("You are a savage, witty comedian"));
        assert!(prompt.contains("Hinglish"));
        assert!(prompt.contains("playful and not actually mean"));
    }
}
