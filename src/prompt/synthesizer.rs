//! Composition of the final prompt sentence.

use super::artist_type::{classify_artist_type, DEFAULT_ARTIST_TYPE};
use super::decade::precise_decade;
use super::scale::{DANCEABILITY_SCALE, ENERGY_SCALE, MOOD_SCALE};
use crate::catalog::CatalogTrackInfo;
use crate::encyclopedia::EncyclopediaSongInfo;
use crate::text::UNKNOWN_YEAR_SENTINEL;
use rand::Rng;
use std::collections::HashSet;

/// Instrumentalness above which a track is called "instrumental".
pub const INSTRUMENTAL_THRESHOLD: f64 = 0.5;

/// Encyclopedia genres when there are any, otherwise the artist's catalog genres.
///
/// Duplicates are dropped; the remaining order is not part of the contract.
pub fn resolve_genres(
    track: &CatalogTrackInfo,
    encyclopedia: Option<&EncyclopediaSongInfo>,
) -> Vec<String> {
    let source = match encyclopedia {
        Some(info) if !info.genres.is_empty() => &info.genres,
        _ => &track.artist_genres,
    };

    let mut seen = HashSet::new();
    source
        .iter()
        .filter(|genre| seen.insert(genre.as_str()))
        .cloned()
        .collect()
}

/// The earlier of the encyclopedia and catalog years.
///
/// Unknown years count as [`UNKNOWN_YEAR_SENTINEL`]; `None` when neither is known.
pub fn resolve_release_year(
    track: &CatalogTrackInfo,
    encyclopedia: Option<&EncyclopediaSongInfo>,
) -> Option<i32> {
    let encyclopedia_year = encyclopedia
        .and_then(|info| info.release_year)
        .unwrap_or(UNKNOWN_YEAR_SENTINEL);
    let catalog_year = track.release_year().unwrap_or(UNKNOWN_YEAR_SENTINEL);

    let year = encyclopedia_year.min(catalog_year);
    (year != UNKNOWN_YEAR_SENTINEL).then_some(year)
}

/// Build the descriptive prompt for a track.
///
/// The energy, mood and danceability words are drawn from `rng`. When the
/// track is not instrumental the template leaves an empty slot, producing
/// `"<genres>,  song,"` with a doubled space.
pub fn synthesize_prompt<R: Rng + ?Sized>(
    track: &CatalogTrackInfo,
    encyclopedia: Option<&EncyclopediaSongInfo>,
    rng: &mut R,
) -> String {
    let genres = resolve_genres(track, encyclopedia).join(", ");
    let decade = resolve_release_year(track, encyclopedia)
        .map(precise_decade)
        .unwrap_or_default();

    let energy = ENERGY_SCALE.describe(track.energy, rng);
    let danceability = DANCEABILITY_SCALE.describe(track.danceability, rng);
    let mood = MOOD_SCALE.describe(track.valence, rng);

    let instrumental = if track.instrumentalness.unwrap_or(0.0) > INSTRUMENTAL_THRESHOLD {
        "instrumental"
    } else {
        ""
    };

    let artist_type = encyclopedia
        .map(|info| classify_artist_type(&info.description))
        .unwrap_or_else(|| DEFAULT_ARTIST_TYPE.to_string());

    let prompt = format!(
        "a {} {}, {} song, {}, {} bpm, {}, {}, {}, {} {} key",
        decade,
        genres,
        instrumental,
        artist_type,
        track.rounded_tempo(),
        energy,
        mood,
        danceability,
        track.key_name(),
        track.mode,
    );

    prompt.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AlbumRef, Mode, PitchClass};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn track() -> CatalogTrackInfo {
        CatalogTrackInfo {
            id: "t1".to_string(),
            name: "Take On Me".to_string(),
            artist_name: "a-ha".to_string(),
            album: AlbumRef {
                name: "Hunting High and Low".to_string(),
                image_urls: vec![],
            },
            release_date: "1985-05-01".to_string(),
            popularity: 80,
            tempo: 120.0,
            pitch_class: PitchClass::new(0).unwrap(),
            mode: Mode::Major,
            energy: 0.8,
            danceability: 0.7,
            valence: 0.9,
            instrumentalness: None,
            artist_genres: vec!["pop".to_string()],
        }
    }

    fn encyclopedia(year: Option<i32>, genres: &[&str], description: &str) -> EncyclopediaSongInfo {
        EncyclopediaSongInfo {
            title: "Take On Me".to_string(),
            release_year: year,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            description: description.to_string(),
            style_sentence: String::new(),
        }
    }

    fn high_terms(scale: &crate::prompt::DescriptiveScale) -> &'static [&'static str] {
        scale.bands.last().unwrap().terms
    }

    // ==========================================================================
    // Genres and year
    // ==========================================================================

    #[test]
    fn test_genres_prefer_encyclopedia() {
        let info = encyclopedia(None, &["synth-pop", "new wave"], "");
        assert_eq!(
            resolve_genres(&track(), Some(&info)),
            vec!["synth-pop", "new wave"]
        );
    }

    #[test]
    fn test_genres_fall_back_when_encyclopedia_has_none() {
        let info = encyclopedia(None, &[], "");
        assert_eq!(resolve_genres(&track(), Some(&info)), vec!["pop"]);
        assert_eq!(resolve_genres(&track(), None), vec!["pop"]);
    }

    #[test]
    fn test_genres_deduplicated() {
        let info = encyclopedia(None, &["rock", "pop", "rock"], "");
        let genres = resolve_genres(&track(), Some(&info));
        assert_eq!(genres.len(), 2);
        assert!(genres.contains(&"rock".to_string()));
        assert!(genres.contains(&"pop".to_string()));
    }

    #[test]
    fn test_release_year_takes_earlier() {
        let info = encyclopedia(Some(1984), &[], "");
        assert_eq!(resolve_release_year(&track(), Some(&info)), Some(1984));

        let info = encyclopedia(Some(1999), &[], "");
        assert_eq!(resolve_release_year(&track(), Some(&info)), Some(1985));
    }

    #[test]
    fn test_release_year_unknown_encyclopedia_year_uses_catalog() {
        let info = encyclopedia(None, &[], "");
        assert_eq!(resolve_release_year(&track(), Some(&info)), Some(1985));
        assert_eq!(resolve_release_year(&track(), None), Some(1985));
    }

    #[test]
    fn test_release_year_unknown_everywhere() {
        let mut t = track();
        t.release_date = String::new();
        assert_eq!(resolve_release_year(&t, None), None);
    }

    // ==========================================================================
    // Full sentence
    // ==========================================================================

    #[test]
    fn test_catalog_only_prompt() {
        let mut rng = StdRng::seed_from_u64(11);
        let prompt = synthesize_prompt(&track(), None, &mut rng);

        assert!(prompt.starts_with("a mid 1980s pop,  song, artist, 120 bpm, "));
        assert!(prompt.ends_with("C Major key"));

        // energy, mood, danceability follow the fixed slots
        let rest = prompt
            .trim_start_matches("a mid 1980s pop,  song, artist, 120 bpm, ")
            .trim_end_matches(", C Major key");
        let words: Vec<&str> = rest.split(", ").collect();
        assert_eq!(words.len(), 3);
        assert!(high_terms(&ENERGY_SCALE).contains(&words[0]));
        assert!(high_terms(&MOOD_SCALE).contains(&words[1]));
        assert!(high_terms(&DANCEABILITY_SCALE).contains(&words[2]));
    }

    #[test]
    fn test_empty_instrumental_slot_keeps_double_space() {
        let mut rng = StdRng::seed_from_u64(0);
        let prompt = synthesize_prompt(&track(), None, &mut rng);
        assert!(prompt.contains("pop,  song,"));
    }

    #[test]
    fn test_instrumental_flag() {
        let mut t = track();
        t.instrumentalness = Some(0.9);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(synthesize_prompt(&t, None, &mut rng).contains("pop, instrumental song,"));

        t.instrumentalness = Some(0.5);
        assert!(synthesize_prompt(&t, None, &mut rng).contains("pop,  song,"));
    }

    #[test]
    fn test_encyclopedia_drives_genres_year_and_artist_type() {
        // "\w" stops at the hyphen, so only "pop" precedes "band"
        let info = encyclopedia(
            Some(1984),
            &["synth-pop"],
            "\"Take On Me\" is a song by Norwegian synth-pop band a-ha.",
        );
        let mut rng = StdRng::seed_from_u64(5);
        let prompt = synthesize_prompt(&track(), Some(&info), &mut rng);
        assert!(prompt.starts_with("a mid 1980s synth-pop,  song, pop band, 120 bpm, "));
    }

    #[test]
    fn test_rounded_tempo_and_minor_key() {
        let mut t = track();
        t.tempo = 97.5;
        t.pitch_class = PitchClass::new(9).unwrap();
        t.mode = Mode::Minor;
        let mut rng = StdRng::seed_from_u64(0);
        let prompt = synthesize_prompt(&t, None, &mut rng);
        assert!(prompt.contains(", 98 bpm, "));
        assert!(prompt.ends_with("A Minor key"));

        t.tempo = 120.5;
        let prompt = synthesize_prompt(&t, None, &mut rng);
        assert!(prompt.contains(", 120 bpm, "));
    }

    #[test]
    fn test_unknown_year_leaves_decade_slot_empty() {
        let mut t = track();
        t.release_date = "????".to_string();
        let mut rng = StdRng::seed_from_u64(0);
        let prompt = synthesize_prompt(&t, None, &mut rng);
        assert!(prompt.starts_with("a  pop,  song,"));
    }
}
