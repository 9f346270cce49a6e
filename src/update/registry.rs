//! Registry trait for fetching mod versions from a remote catalog

#[cfg(test)]
use mockall::automock;

use crate::update::error::RegistryError;
use crate::update::types::RemoteVersionRecord;

/// Trait for fetching the published versions of a mod
///
/// Implementations own transport, authentication, and pagination; the
/// engine wraps them with retry policy but never reaches past this seam.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionRegistry: Send + Sync {
    /// Fetch every published version of a mod
    ///
    /// # Arguments
    /// * `mod_id` - The stable remote catalog id (Modrinth project id)
    ///
    /// # Returns
    /// * `Ok(Vec<RemoteVersionRecord>)` - Published versions, remote order
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_versions(
        &self,
        mod_id: &str,
    ) -> Result<Vec<RemoteVersionRecord>, RegistryError>;
}
