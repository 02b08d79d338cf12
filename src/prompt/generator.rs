//! End-to-end prompt generation over explicit catalog and encyclopedia handles.

use super::synthesizer::{resolve_release_year, synthesize_prompt};
use crate::catalog::{CatalogSource, CatalogTrackInfo};
use crate::encyclopedia::{lookup_song, EncyclopediaSongInfo, EncyclopediaSource};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Errors surfaced to the caller. Encyclopedia problems never appear here.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("No catalog track found for \"{0}\"")]
    NotFound(String),

    #[error("Catalog lookup failed: {0:#}")]
    Catalog(anyhow::Error),
}

/// A generated prompt together with the records it was derived from.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPrompt {
    pub track: CatalogTrackInfo,
    pub encyclopedia: Option<EncyclopediaSongInfo>,
    pub release_year: Option<i32>,
    pub prompt: String,
}

pub struct PromptGenerator<'a> {
    catalog: &'a dyn CatalogSource,
    encyclopedia: Option<&'a dyn EncyclopediaSource>,
}

impl<'a> PromptGenerator<'a> {
    pub fn new(catalog: &'a dyn CatalogSource, encyclopedia: &'a dyn EncyclopediaSource) -> Self {
        Self {
            catalog,
            encyclopedia: Some(encyclopedia),
        }
    }

    /// A generator that never consults an encyclopedia.
    pub fn catalog_only(catalog: &'a dyn CatalogSource) -> Self {
        Self {
            catalog,
            encyclopedia: None,
        }
    }

    /// Look the query up and describe the best-matching track.
    ///
    /// One catalog search, then one encyclopedia lookup keyed on the
    /// catalog's track and artist names.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        query: &str,
        rng: &mut R,
    ) -> Result<GeneratedPrompt, PromptError> {
        let track = self
            .catalog
            .search_track(query)
            .map_err(PromptError::Catalog)?
            .ok_or_else(|| PromptError::NotFound(query.to_string()))?;
        info!(
            "Catalog match for {:?}: {} - {}",
            query, track.artist_name, track.name
        );

        let encyclopedia = self
            .encyclopedia
            .and_then(|source| lookup_song(source, &track.name, &track.artist_name));
        if encyclopedia.is_none() {
            info!("No encyclopedia record, describing from catalog data only");
        }

        let release_year = resolve_release_year(&track, encyclopedia.as_ref());
        let prompt = synthesize_prompt(&track, encyclopedia.as_ref(), rng);

        Ok(GeneratedPrompt {
            track,
            encyclopedia,
            release_year,
            prompt,
        })
    }
}
