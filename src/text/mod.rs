//! Free-text helpers shared by the encyclopedia parser and the prompt synthesizer.

pub mod date;
pub mod normalize;

pub use date::{extract_year, UNKNOWN_YEAR_SENTINEL};
pub use normalize::{strip_annotations, strip_numbers, strip_parentheticals};
