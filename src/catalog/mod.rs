//! Music-catalog collaborator: track metadata and audio features.
//!
//! - `models`: the immutable track record consumed by the prompt pipeline
//! - `key`: pitch class / mode types and their display names
//! - `spotify`: Spotify Web API client implementing [`CatalogSource`]

mod key;
mod models;
mod source;
pub mod spotify;

pub use key::{pitch_class_to_key, InvalidPitchClass, Mode, PitchClass};
pub use models::{AlbumRef, CatalogTrackInfo};
#[cfg(feature = "mock")]
pub use source::MockCatalogSource;
pub use source::CatalogSource;
pub use spotify::SpotifyClient;
