//! Installed-mod catalog: domain types and the storage seam
//!
//! The engine never touches catalog files directly. It reads a [`ModCatalog`]
//! through the [`store::CatalogStore`] trait, so tests inject an in-memory
//! fake and the CLI wires up the JSON-file store.

pub mod json;
pub mod store;
pub mod types;
