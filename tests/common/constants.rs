//! Shared constants for end-to-end tests
//!
//! When sample data changes, update only this file.

// ============================================================================
// Catalog
// ============================================================================

/// Query that matches the sample track
pub const TAKE_ON_ME_QUERY: &str = "take on me a-ha";

/// Query nothing in the fake catalog matches
pub const UNKNOWN_QUERY: &str = "no such song anywhere";

pub const TRACK_ID: &str = "2WfaOiMkCvy7F5fcp2zZ8L";
pub const TRACK_NAME: &str = "Take On Me";
pub const ARTIST_NAME: &str = "a-ha";
pub const ALBUM_NAME: &str = "Hunting High and Low";
pub const RELEASE_DATE: &str = "1985-05-01";
pub const COVER_URL: &str = "https://i.scdn.co/image/cover-640";

// ============================================================================
// Encyclopedia
// ============================================================================

pub const SONG_PAGE_TITLE: &str = "Take On Me (song)";
pub const ALBUM_PAGE_TITLE: &str = "Hunting High and Low (album)";
pub const DISAMBIGUATION_TITLE: &str = "Take On Me (disambiguation)";

// ============================================================================
// Descriptive terms of the top band of each scale
// ============================================================================

pub const HIGH_ENERGY_TERMS: &[&str] = &["energetic", "lively", "upbeat", "dynamic", "vibrant"];

pub const HIGH_DANCEABILITY_TERMS: &[&str] = &[
    "groovy",
    "rhythmic",
    "foot-tapping",
    "body-moving",
    "infectious",
];

pub const HIGH_MOOD_TERMS: &[&str] = &["joyful", "uplifting", "cheerful", "exuberant", "optimistic"];
