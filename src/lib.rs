//! Songprompt Library
//!
//! Turns a free-text song query into a short descriptive text prompt for
//! music generation, combining catalog audio features with encyclopedia
//! metadata.

pub mod catalog;
pub mod config;
pub mod encyclopedia;
pub mod prompt;
pub mod text;

// Re-export commonly used types for convenience
pub use catalog::{CatalogSource, CatalogTrackInfo, SpotifyClient};
pub use config::{AppConfig, CliConfig, FileConfig};
pub use encyclopedia::{EncyclopediaSongInfo, EncyclopediaSource, WikipediaClient};
pub use prompt::{GeneratedPrompt, PromptError, PromptGenerator};
