//! Encyclopedia collaborator: genre, release date and biography from Wikipedia.
//!
//! - `source`: the lookup trait and its error taxonomy
//! - `parser`: candidate disambiguation and infobox/lead extraction
//! - `lookup`: all-or-nothing assembly of an [`EncyclopediaSongInfo`]
//! - `wikipedia`: MediaWiki API client implementing [`EncyclopediaSource`]

mod lookup;
mod models;
pub mod parser;
mod source;
pub mod wikipedia;

pub use lookup::{build_record, lookup_song};
pub use models::{EncyclopediaPage, EncyclopediaSongInfo};
#[cfg(feature = "mock")]
pub use source::MockEncyclopediaSource;
pub use source::{EncyclopediaError, EncyclopediaSource};
pub use wikipedia::WikipediaClient;
