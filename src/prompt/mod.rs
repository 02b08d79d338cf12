//! Prompt synthesis: vocabulary scales, artist-type inference, and the
//! end-to-end generator that ties catalog and encyclopedia lookups together.

pub mod artist_type;
mod decade;
mod generator;
pub mod scale;
mod synthesizer;

pub use artist_type::classify_artist_type;
pub use decade::{coarse_decade, precise_decade};
pub use generator::{GeneratedPrompt, PromptError, PromptGenerator};
pub use scale::{DescriptiveScale, ScaleBand, DANCEABILITY_SCALE, ENERGY_SCALE, MOOD_SCALE};
pub use synthesizer::{resolve_genres, resolve_release_year, synthesize_prompt};
