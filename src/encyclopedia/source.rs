//! EncyclopediaSource trait definition.

use super::models::EncyclopediaPage;
use thiserror::Error;

/// Errors that can occur when talking to an encyclopedia.
#[derive(Debug, Error)]
pub enum EncyclopediaError {
    #[error("\"{title}\" is a disambiguation page ({} options)", .options.len())]
    Disambiguation { title: String, options: Vec<String> },

    #[error("No page found for \"{0}\"")]
    PageNotFound(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A searchable encyclopedia.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EncyclopediaSource {
    /// Titles of pages matching `query`, best match first.
    fn search(&self, query: &str) -> Result<Vec<String>, EncyclopediaError>;

    /// Fetch a page by exact title.
    fn fetch_page(&self, title: &str) -> Result<EncyclopediaPage, EncyclopediaError>;
}
