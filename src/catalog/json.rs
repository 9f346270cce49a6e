//! JSON-file implementation of the catalog store

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::store::CatalogStore;
use crate::catalog::types::ModCatalog;
use crate::update::error::CatalogError;

/// Catalog persisted as a single pretty-printed JSON file
///
/// The file is operator-managed, so `load` keeps the original ordering of
/// the mod list and `save` writes it back readable.
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogStore for JsonCatalogStore {
    fn load(&self) -> Result<ModCatalog, CatalogError> {
        debug!("Loading mod catalog from {:?}", self.path);
        let content = std::fs::read_to_string(&self.path)?;
        let catalog: ModCatalog = serde_json::from_str(&content)?;
        info!(
            "Loaded {} mods from catalog {:?}",
            catalog.mods.len(),
            self.path
        );
        Ok(catalog)
    }

    fn save(&self, catalog: &ModCatalog) -> Result<(), CatalogError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(catalog)?;
        std::fs::write(&self.path, content)?;
        debug!("Saved {} mods to catalog {:?}", catalog.mods.len(), self.path);
        Ok(())
    }
}
