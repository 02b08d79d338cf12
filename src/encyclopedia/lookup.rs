//! Song lookup against an encyclopedia, degrading to "no record" on any failure.

use super::models::{EncyclopediaPage, EncyclopediaSongInfo};
use super::parser::{lead_description, parse_infobox, select_candidate, style_sentence};
use super::source::{EncyclopediaError, EncyclopediaSource};
use crate::text::extract_year;
use tracing::{debug, info, warn};

/// Look up a song and extract its encyclopedia record.
///
/// Never fails: no search results, an unsuitable candidate list, a
/// disambiguation page, a missing page or any transport problem all yield
/// `None`. A record is either complete or absent.
pub fn lookup_song(
    source: &dyn EncyclopediaSource,
    song_name: &str,
    artist_name: &str,
) -> Option<EncyclopediaSongInfo> {
    let query = format!("{} {}", song_name, artist_name);
    info!("Searching encyclopedia for: {}", query);

    match try_lookup_song(source, &query, song_name) {
        Ok(record) => record,
        Err(EncyclopediaError::Disambiguation { title, options }) => {
            info!(
                "\"{}\" is ambiguous ({} options), skipping encyclopedia data",
                title,
                options.len()
            );
            None
        }
        Err(EncyclopediaError::PageNotFound(title)) => {
            info!("No encyclopedia page found for \"{}\"", title);
            None
        }
        Err(e) => {
            warn!("Encyclopedia lookup for {:?} failed: {}", query, e);
            None
        }
    }
}

fn try_lookup_song(
    source: &dyn EncyclopediaSource,
    query: &str,
    song_name: &str,
) -> Result<Option<EncyclopediaSongInfo>, EncyclopediaError> {
    let results = source.search(query)?;
    if results.is_empty() {
        info!("No encyclopedia search results for {:?}", query);
        return Ok(None);
    }
    debug!("Encyclopedia search results: {:?}", results);

    let Some(title) = select_candidate(&results, song_name) else {
        info!("Every top search result is an album page, skipping encyclopedia data");
        return Ok(None);
    };
    debug!("Selected encyclopedia page \"{}\"", title);

    let page = source.fetch_page(title)?;
    Ok(Some(build_record(&page)))
}

/// Extract the song record from a fetched page.
pub fn build_record(page: &EncyclopediaPage) -> EncyclopediaSongInfo {
    let infobox = parse_infobox(&page.html);
    debug!(
        "Extracted release field {:?} and genres {:?}",
        infobox.released, infobox.genres
    );

    let release_year = infobox.released.as_deref().and_then(extract_year);
    let description = lead_description(&page.plain_text);
    let style_sentence = style_sentence(&infobox.genres, &description);

    EncyclopediaSongInfo {
        title: page.title.clone(),
        release_year,
        genres: infobox.genres,
        description,
        style_sentence,
    }
}
