//! CatalogSource trait definition.

use super::models::CatalogTrackInfo;
use anyhow::Result;

/// A searchable music catalog.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CatalogSource {
    /// Find the best-matching track for a free-text query.
    ///
    /// `Ok(None)` means the catalog has no match; `Err` is reserved for
    /// transport or decoding failures.
    fn search_track(&self, query: &str) -> Result<Option<CatalogTrackInfo>>;
}
