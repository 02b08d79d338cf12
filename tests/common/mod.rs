//! Common test infrastructure
//!
//! In-memory catalog and encyclopedia sources plus the sample data they
//! serve. Tests should only import from this module, not from internal
//! submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{FakeCatalog, TAKE_ON_ME_QUERY};
//! use songprompt::PromptGenerator;
//!
//! let catalog = FakeCatalog::with_take_on_me();
//! let generator = PromptGenerator::catalog_only(&catalog);
//! ```

mod constants;
mod fixtures;

// Public API - this is what tests import
pub use constants::*;
pub use fixtures::{
    sample_page, take_on_me_track, FailingCatalog, FakeCatalog, FakeEncyclopedia,
};
