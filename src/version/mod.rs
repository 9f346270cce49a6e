//! Version parsing and comparison for mod version strings
//!
//! Mod version strings in the wild are messy: optional `v` prefixes,
//! game-version prefixes baked in (`1.21.1-6.0.9`), pre-release tags in
//! several spellings, and purely numeric tails of varying length. This
//! module turns them into an ordered numeric representation and builds a
//! total order on top of it.
//!
//! # Modules
//!
//! - [`parser`]: free-form string → [`parser::ParsedVersion`]
//! - [`compare`]: total order, `is_newer`, `latest_version`, display
//!   formatting

pub mod compare;
pub mod parser;

pub use compare::{compare_versions, format_version, is_newer, latest_version};
pub use parser::ParsedVersion;
