use serde::{Deserialize, Serialize};

/// A fetched encyclopedia page, before any extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct EncyclopediaPage {
    pub title: String,
    /// Plain-text rendering; the first line is the lead paragraph.
    pub plain_text: String,
    /// Rendered HTML, including the infobox table.
    pub html: String,
}

/// What the encyclopedia knows about a song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncyclopediaSongInfo {
    pub title: String,
    pub release_year: Option<i32>,
    pub genres: Vec<String>,
    pub description: String,
    pub style_sentence: String,
}
