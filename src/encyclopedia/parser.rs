//! Extraction of song facts from encyclopedia search results and markup.

use crate::text::{strip_annotations, strip_numbers, strip_parentheticals};
use select::document::Document;
use select::node::Node;
use select::predicate::Name;

/// How many search results are considered when picking a page.
pub const MAX_CANDIDATES: usize = 4;

/// Raw infobox fields; either may be missing from the markup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoboxFields {
    pub released: Option<String>,
    pub genres: Vec<String>,
}

/// Pick the search result most likely to be the song's own page.
///
/// Among the first [`MAX_CANDIDATES`] titles, album pages are skipped and a
/// title naming both the song and the word "song" wins. Without such a
/// title the first result is used, unless every examined title was an
/// album page, in which case there is no candidate.
pub fn select_candidate<'a>(results: &'a [String], song_name: &str) -> Option<&'a str> {
    let song_name = song_name.to_lowercase();
    let examined = &results[..results.len().min(MAX_CANDIDATES)];
    let mut albums = 0;

    for title in examined {
        let lower = title.to_lowercase();
        if lower.contains("album") {
            albums += 1;
            continue;
        }
        if lower.contains(&song_name) && lower.contains("song") {
            return Some(title);
        }
    }

    if albums == examined.len() {
        return None;
    }
    results.first().map(String::as_str)
}

/// Read the "Released" and "Genre" rows of the page's infobox.
pub fn parse_infobox(html: &str) -> InfoboxFields {
    let document = Document::from(html);

    let released = document
        .find(Name("th"))
        .filter(|th| th.text().contains("Released"))
        .next()
        .and_then(next_data_cell)
        .map(|td| td.text());

    let genres = document
        .find(Name("th"))
        .filter(|th| th.text().trim() == "Genre")
        .next()
        .and_then(next_data_cell)
        .map(|td| {
            td.find(Name("a"))
                .filter_map(|link| {
                    let genre = strip_annotations(&link.text());
                    let genre = genre.trim();
                    (!genre.is_empty()).then(|| genre.to_string())
                })
                .collect()
        })
        .unwrap_or_default();

    InfoboxFields { released, genres }
}

fn next_data_cell(header: Node<'_>) -> Option<Node<'_>> {
    let mut sibling = header.next();
    while let Some(node) = sibling {
        if node.name() == Some("td") {
            return Some(node);
        }
        sibling = node.next();
    }
    None
}

/// First line of the page text with parentheticals and numbers removed.
pub fn lead_description(plain_text: &str) -> String {
    let first_line = plain_text.split('\n').next().unwrap_or_default();
    strip_numbers(strip_parentheticals(first_line).trim())
}

/// One-line summary of genre and description.
pub fn style_sentence(genres: &[String], description: &str) -> String {
    let genre_str = if genres.is_empty() {
        "unknown genre".to_string()
    } else {
        genres.join(" and ")
    };
    format!("This is a {} song. {}", genre_str, description)
}
