//! MediaWiki API client implementing [`EncyclopediaSource`].
//!
//! Pages are fetched without auto-suggestion: the title passed to
//! `fetch_page` is used verbatim (redirects are followed).

use super::models::EncyclopediaPage;
use super::source::{EncyclopediaError, EncyclopediaSource};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";
const SEARCH_LIMIT: &str = "10";
const DISAMBIGUATION_OPTIONS_LIMIT: &str = "50";

pub struct WikipediaClient {
    client: Client,
    api_url: String,
}

#[derive(Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    error: Option<ApiError>,
    query: Option<SearchQuery>,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Deserialize)]
struct PageQueryResponse {
    error: Option<ApiError>,
    query: Option<PageQuery>,
}

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default)]
    pages: Vec<PageInfo>,
}

#[derive(Deserialize)]
struct PageInfo {
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    #[serde(default)]
    extract: String,
    pageprops: Option<PageProps>,
    #[serde(default)]
    links: Vec<PageLink>,
}

#[derive(Deserialize)]
struct PageProps {
    disambiguation: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct PageLink {
    title: String,
}

#[derive(Deserialize)]
struct ParseResponse {
    error: Option<ApiError>,
    parse: Option<ParsedPage>,
}

#[derive(Deserialize)]
struct ParsedPage {
    text: String,
}

impl WikipediaClient {
    pub fn new(api_url: &str, user_agent: &str, timeout_sec: u64) -> Result<Self, EncyclopediaError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_sec))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
        })
    }

    fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, EncyclopediaError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()?;

        if !response.status().is_success() {
            return Err(EncyclopediaError::InvalidResponse(format!(
                "MediaWiki API failed with status {}",
                response.status()
            )));
        }

        Ok(response.json()?)
    }

    /// Plain-text extract and page properties, following redirects.
    fn query_page(&self, title: &str) -> Result<PageInfo, EncyclopediaError> {
        let body: PageQueryResponse = self.get(&[
            ("action", "query"),
            ("prop", "extracts|pageprops|links"),
            ("ppprop", "disambiguation"),
            ("explaintext", "1"),
            ("plnamespace", "0"),
            ("pllimit", DISAMBIGUATION_OPTIONS_LIMIT),
            ("redirects", "1"),
            ("titles", title),
        ])?;

        if let Some(error) = body.error {
            return Err(api_error(error));
        }

        let page = body
            .query
            .and_then(|q| q.pages.into_iter().next())
            .ok_or_else(|| EncyclopediaError::PageNotFound(title.to_string()))?;

        if page.missing || page.invalid {
            return Err(EncyclopediaError::PageNotFound(title.to_string()));
        }

        let is_disambiguation = page
            .pageprops
            .as_ref()
            .is_some_and(|props| props.disambiguation.is_some());
        if is_disambiguation {
            return Err(EncyclopediaError::Disambiguation {
                title: page.title,
                options: page.links.into_iter().map(|link| link.title).collect(),
            });
        }

        Ok(page)
    }

    fn page_html(&self, title: &str) -> Result<String, EncyclopediaError> {
        let body: ParseResponse = self.get(&[
            ("action", "parse"),
            ("page", title),
            ("prop", "text"),
            ("redirects", "1"),
        ])?;

        if let Some(error) = body.error {
            return Err(match error.code.as_str() {
                "missingtitle" | "invalidtitle" => EncyclopediaError::PageNotFound(title.to_string()),
                _ => api_error(error),
            });
        }

        body.parse
            .map(|parsed| parsed.text)
            .ok_or_else(|| EncyclopediaError::InvalidResponse("parse result missing".to_string()))
    }
}

fn api_error(error: ApiError) -> EncyclopediaError {
    EncyclopediaError::InvalidResponse(format!("{}: {}", error.code, error.info))
}

impl EncyclopediaSource for WikipediaClient {
    fn search(&self, query: &str) -> Result<Vec<String>, EncyclopediaError> {
        let body: SearchResponse = self.get(&[
            ("action", "query"),
            ("list", "search"),
            ("srsearch", query),
            ("srlimit", SEARCH_LIMIT),
            ("srprop", ""),
        ])?;

        if let Some(error) = body.error {
            return Err(api_error(error));
        }

        Ok(body
            .query
            .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default())
    }

    fn fetch_page(&self, title: &str) -> Result<EncyclopediaPage, EncyclopediaError> {
        let page = self.query_page(title)?;
        debug!("Fetched extract for \"{}\" ({} bytes)", page.title, page.extract.len());
        let html = self.page_html(&page.title)?;

        Ok(EncyclopediaPage {
            title: page.title,
            plain_text: page.extract,
            html,
        })
    }
}
