//! Storage seam for the mod catalog

#[cfg(test)]
use mockall::automock;

use crate::catalog::types::ModCatalog;
use crate::update::error::CatalogError;

/// Trait for loading and saving the installed-mod catalog
///
/// The check cycle only ever calls `load`; `save` exists for the
/// surrounding tooling that records applied updates.
#[cfg_attr(test, automock)]
pub trait CatalogStore: Send + Sync {
    /// Load the full catalog (mod list + target environment)
    fn load(&self) -> Result<ModCatalog, CatalogError>;

    /// Persist the full catalog
    fn save(&self, catalog: &ModCatalog) -> Result<(), CatalogError>;
}

/// In-memory store for deterministic tests and embedding
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    catalog: std::sync::Mutex<ModCatalog>,
}

impl InMemoryCatalogStore {
    pub fn new(catalog: ModCatalog) -> Self {
        Self {
            catalog: std::sync::Mutex::new(catalog),
        }
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn load(&self) -> Result<ModCatalog, CatalogError> {
        Ok(self.catalog.lock().expect("catalog lock poisoned").clone())
    }

    fn save(&self, catalog: &ModCatalog) -> Result<(), CatalogError> {
        *self.catalog.lock().expect("catalog lock poisoned") = catalog.clone();
        Ok(())
    }
}
