//! In-memory sources and sample records

use super::constants::*;
use songprompt::catalog::{AlbumRef, CatalogSource, CatalogTrackInfo, Mode, PitchClass};
use songprompt::encyclopedia::{EncyclopediaError, EncyclopediaPage, EncyclopediaSource};
use std::cell::RefCell;
use std::collections::HashMap;

/// The sample track: 120 bpm, C major, high energy, danceability and valence.
pub fn take_on_me_track() -> CatalogTrackInfo {
    CatalogTrackInfo {
        id: TRACK_ID.to_string(),
        name: TRACK_NAME.to_string(),
        artist_name: ARTIST_NAME.to_string(),
        album: AlbumRef {
            name: ALBUM_NAME.to_string(),
            image_urls: vec![COVER_URL.to_string()],
        },
        release_date: RELEASE_DATE.to_string(),
        popularity: 84,
        tempo: 120.0,
        pitch_class: PitchClass::new(0).unwrap(),
        mode: Mode::Major,
        energy: 0.8,
        danceability: 0.7,
        valence: 0.9,
        instrumentalness: Some(0.0),
        artist_genres: vec!["pop".to_string()],
    }
}

/// An encyclopedia page with an infobox carrying a release date and genres.
pub fn sample_page(title: &str, released: &str, genres: &[&str], lead: &str) -> EncyclopediaPage {
    let genre_links: String = genres
        .iter()
        .map(|genre| format!("<a href=\"/wiki/{0}\">{0}</a>", genre))
        .collect();
    let html = format!(
        r#"<table class="infobox">
  <tr><th colspan="2">{title}</th></tr>
  <tr><th scope="row">Released</th><td>{released}</td></tr>
  <tr><th scope="row"><a href="/wiki/Music_genre">Genre</a></th><td>{genre_links}</td></tr>
</table>"#
    );

    EncyclopediaPage {
        title: title.to_string(),
        plain_text: format!("{}\nSecond paragraph.", lead),
        html,
    }
}

/// Catalog keyed by exact query.
pub struct FakeCatalog {
    tracks: HashMap<String, CatalogTrackInfo>,
    pub queries: RefCell<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            tracks: HashMap::new(),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn with_track(mut self, query: &str, track: CatalogTrackInfo) -> Self {
        self.tracks.insert(query.to_string(), track);
        self
    }

    pub fn with_take_on_me() -> Self {
        Self::new().with_track(TAKE_ON_ME_QUERY, take_on_me_track())
    }
}

impl CatalogSource for FakeCatalog {
    fn search_track(&self, query: &str) -> anyhow::Result<Option<CatalogTrackInfo>> {
        self.queries.borrow_mut().push(query.to_string());
        Ok(self.tracks.get(query).cloned())
    }
}

/// Catalog whose every search fails.
pub struct FailingCatalog;

impl CatalogSource for FailingCatalog {
    fn search_track(&self, _query: &str) -> anyhow::Result<Option<CatalogTrackInfo>> {
        anyhow::bail!("Catalog request failed with status 503 Service Unavailable")
    }
}

/// Encyclopedia serving canned search results and pages.
///
/// Titles registered as disambiguations fail `fetch_page` accordingly;
/// unknown titles are reported as missing.
#[derive(Default)]
pub struct FakeEncyclopedia {
    search_results: Vec<String>,
    pages: HashMap<String, EncyclopediaPage>,
    disambiguations: Vec<String>,
    fail_search: bool,
    pub searches: RefCell<Vec<String>>,
    pub fetched: RefCell<Vec<String>>,
}

impl FakeEncyclopedia {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(mut self, titles: &[&str]) -> Self {
        self.search_results = titles.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_page(mut self, page: EncyclopediaPage) -> Self {
        self.pages.insert(page.title.clone(), page);
        self
    }

    pub fn with_disambiguation(mut self, title: &str) -> Self {
        self.disambiguations.push(title.to_string());
        self
    }

    pub fn failing() -> Self {
        Self {
            fail_search: true,
            ..Self::default()
        }
    }
}

impl EncyclopediaSource for FakeEncyclopedia {
    fn search(&self, query: &str) -> Result<Vec<String>, EncyclopediaError> {
        self.searches.borrow_mut().push(query.to_string());
        if self.fail_search {
            return Err(EncyclopediaError::InvalidResponse(
                "connection reset".to_string(),
            ));
        }
        Ok(self.search_results.clone())
    }

    fn fetch_page(&self, title: &str) -> Result<EncyclopediaPage, EncyclopediaError> {
        self.fetched.borrow_mut().push(title.to_string());
        if self.disambiguations.iter().any(|t| t == title) {
            return Err(EncyclopediaError::Disambiguation {
                title: title.to_string(),
                options: vec![
                    "Take On Me (song)".to_string(),
                    "Take On Me (film)".to_string(),
                ],
            });
        }
        self.pages
            .get(title)
            .cloned()
            .ok_or_else(|| EncyclopediaError::PageNotFound(title.to_string()))
    }
}
