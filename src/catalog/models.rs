//! Track record returned by a catalog lookup.

use super::key::{pitch_class_to_key, Mode, PitchClass};
use serde::{Deserialize, Serialize};

/// Album the track was released on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumRef {
    pub name: String,
    /// Cover image URLs, largest first.
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl AlbumRef {
    pub fn cover_url(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}

/// Metadata and audio features for one catalog track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogTrackInfo {
    pub id: String,
    pub name: String,
    pub artist_name: String,
    pub album: AlbumRef,
    /// As reported by the catalog: "1985-05-01", "1985-05" or "1985".
    pub release_date: String,
    pub popularity: u32,
    // -- Audio features --
    pub tempo: f64,
    pub pitch_class: PitchClass,
    pub mode: Mode,
    pub energy: f64,
    pub danceability: f64,
    pub valence: f64,
    #[serde(default)]
    pub instrumentalness: Option<f64>,
    // -- Artist --
    #[serde(default)]
    pub artist_genres: Vec<String>,
}

impl CatalogTrackInfo {
    /// Year from the first four characters of the release date.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.get(..4)?.parse().ok()
    }

    pub fn key_name(&self) -> &'static str {
        pitch_class_to_key(self.pitch_class)
    }

    /// Tempo rounded to whole beats per minute, halves to even.
    pub fn rounded_tempo(&self) -> i64 {
        self.tempo.round_ties_even() as i64
    }
}
