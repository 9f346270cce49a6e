//! Batched, paced check cycle over the whole catalog

use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, error, info};

use crate::catalog::store::CatalogStore;
use crate::catalog::types::{InstalledMod, TargetEnvironment};
use crate::config::CheckerConfig;
use crate::update::error::CatalogError;
use crate::update::fetcher::{RetryPolicy, RetryingFetcher, Sleeper, TokioSleeper};
use crate::update::registry::VersionRegistry;
use crate::update::resolver;
use crate::update::summary::UpdateReport;
use crate::update::types::UpdateCheckResult;

/// Runs update checks for every installed mod
///
/// Mods are checked in fixed-size batches: within a batch all lookups run
/// concurrently, batches run strictly sequentially with a pacing delay in
/// between to stay under remote rate limits. A failing mod never aborts or
/// delays the rest of its batch.
pub struct UpdateChecker<R, S = TokioSleeper> {
    fetcher: RetryingFetcher<R, S>,
    batch_size: usize,
    batch_pause: Duration,
}

impl<R: VersionRegistry> UpdateChecker<R> {
    pub fn new(registry: R, config: &CheckerConfig) -> Self {
        let policy = RetryPolicy {
            max_attempts: config.max_attempts,
            base_delay: config.retry_base_delay(),
        };
        Self::with_fetcher(RetryingFetcher::new(registry, policy), config)
    }
}

impl<R: VersionRegistry, S: Sleeper> UpdateChecker<R, S> {
    pub fn with_fetcher(fetcher: RetryingFetcher<R, S>, config: &CheckerConfig) -> Self {
        Self {
            fetcher,
            batch_size: config.batch_size.max(1),
            batch_pause: config.batch_pause(),
        }
    }

    /// Check every mod against the remote catalog
    ///
    /// Results come back in catalog order, one per mod, error flag set for
    /// mods whose lookup failed after retries.
    pub async fn check_all(
        &self,
        mods: &[InstalledMod],
        target: &TargetEnvironment,
    ) -> Vec<UpdateCheckResult> {
        info!(
            "Checking {} mods for updates (batch size {})",
            mods.len(),
            self.batch_size
        );

        let mut results = Vec::with_capacity(mods.len());
        for (i, batch) in mods.chunks(self.batch_size).enumerate() {
            if i > 0 {
                tokio::time::sleep(self.batch_pause).await;
            }
            debug!("Checking batch {} ({} mods)", i + 1, batch.len());

            let checks = batch.iter().map(|m| self.check_one(m, target));
            results.extend(join_all(checks).await);
        }
        results
    }

    /// Load the catalog from `store` and run one full check cycle
    ///
    /// Only catalog loading can fail here; per-mod failures are folded into
    /// the report.
    pub async fn check_catalog(&self, store: &dyn CatalogStore) -> Result<UpdateReport, CatalogError> {
        let catalog = store.load()?;
        let results = self.check_all(&catalog.mods, &catalog.target).await;
        Ok(UpdateReport::new(results))
    }

    async fn check_one(
        &self,
        installed: &InstalledMod,
        target: &TargetEnvironment,
    ) -> UpdateCheckResult {
        match self.fetcher.fetch_versions(&installed.id).await {
            Ok(candidates) => resolver::resolve(installed, &candidates, target),
            Err(err) => {
                error!(
                    "Update check failed for {} ({}): {}",
                    installed.name, installed.id, err
                );
                resolver::failed(installed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::MockCatalogStore;
    use crate::catalog::types::{Loader, ModCatalog};
    use crate::update::error::RegistryError;
    use crate::update::registry::MockVersionRegistry;
    use crate::update::types::{RemoteVersionRecord, SupportLevel};
    use chrono::{TimeZone, Utc};
    use mockall::predicate::eq;

    fn fast_config() -> CheckerConfig {
        CheckerConfig {
            batch_size: 2,
            batch_pause_ms: 0,
            ..Default::default()
        }
    }

    fn installed(id: &str, current: &str) -> InstalledMod {
        InstalledMod {
            id: id.to_string(),
            name: format!("mod-{id}"),
            slug: id.to_lowercase(),
            current_version: current.to_string(),
        }
    }

    fn fabric_candidate(version: &str) -> RemoteVersionRecord {
        RemoteVersionRecord {
            id: format!("{version}-id"),
            version_number: version.to_string(),
            date_published: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            changelog: None,
            game_versions: vec!["1.20.1".to_string()],
            loaders: vec!["fabric".to_string()],
            client_side: SupportLevel::Optional,
            server_side: SupportLevel::Required,
        }
    }

    fn fabric_target() -> TargetEnvironment {
        TargetEnvironment::new("1.20.1", Some(Loader::Fabric))
    }

    #[tokio::test]
    async fn check_all_returns_one_result_per_mod_in_catalog_order() {
        let mut registry = MockVersionRegistry::new();
        registry
            .expect_fetch_versions()
            .with(eq("A"))
            .returning(|_| Ok(vec![fabric_candidate("1.0.1")]));
        registry
            .expect_fetch_versions()
            .with(eq("B"))
            .returning(|_| Ok(vec![fabric_candidate("2.0.0")]));
        registry
            .expect_fetch_versions()
            .with(eq("C"))
            .returning(|_| Ok(vec![]));

        let checker = UpdateChecker::new(registry, &fast_config());
        let mods = vec![
            installed("A", "1.0.0"),
            installed("B", "2.0.0"),
            installed("C", "0.1.0"),
        ];

        let results = checker.check_all(&mods, &fabric_target()).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].mod_id, "A");
        assert!(results[0].has_update);
        assert!(!results[1].has_update); // already on 2.0.0
        assert!(!results[2].has_update); // no candidates
    }

    #[tokio::test]
    async fn one_failing_mod_does_not_affect_its_batch_or_later_batches() {
        let mut registry = MockVersionRegistry::new();
        registry
            .expect_fetch_versions()
            .with(eq("A"))
            .returning(|_| Err(RegistryError::NotFound("A".to_string())));
        registry
            .expect_fetch_versions()
            .with(eq("B"))
            .returning(|_| Ok(vec![fabric_candidate("1.0.1")]));
        registry
            .expect_fetch_versions()
            .with(eq("C"))
            .returning(|_| Ok(vec![fabric_candidate("3.0.0")]));

        let checker = UpdateChecker::new(registry, &fast_config());
        let mods = vec![
            installed("A", "1.0.0"),
            installed("B", "1.0.0"),
            installed("C", "2.0.0"),
        ];

        let results = checker.check_all(&mods, &fabric_target()).await;

        assert!(results[0].error);
        assert!(!results[0].has_update);
        assert!(results[1].has_update);
        assert!(results[2].has_update);
    }

    #[tokio::test]
    async fn pacing_delay_runs_between_batches_but_not_after_the_last() {
        let mut registry = MockVersionRegistry::new();
        registry.expect_fetch_versions().returning(|_| Ok(vec![]));

        let config = CheckerConfig {
            batch_size: 2,
            batch_pause_ms: 100,
            ..Default::default()
        };
        let checker = UpdateChecker::new(registry, &config);
        let mods = vec![
            installed("A", "1.0.0"),
            installed("B", "1.0.0"),
            installed("C", "1.0.0"),
            installed("D", "1.0.0"),
        ];

        let start = std::time::Instant::now();
        let results = checker.check_all(&mods, &fabric_target()).await;
        let elapsed = start.elapsed();

        assert_eq!(results.len(), 4);
        // Two batches, so exactly one pause
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_millis(200));
    }

    #[tokio::test]
    async fn check_all_handles_empty_catalog() {
        let registry = MockVersionRegistry::new();
        let checker = UpdateChecker::new(registry, &fast_config());

        let results = checker.check_all(&[], &fabric_target()).await;

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn check_catalog_loads_through_the_store() {
        let mut registry = MockVersionRegistry::new();
        registry
            .expect_fetch_versions()
            .with(eq("A"))
            .returning(|_| Ok(vec![fabric_candidate("1.0.1")]));

        let mut store = MockCatalogStore::new();
        store.expect_load().times(1).returning(|| {
            Ok(ModCatalog {
                mods: vec![installed("A", "1.0.0")],
                target: fabric_target(),
            })
        });

        let checker = UpdateChecker::new(registry, &fast_config());
        let report = checker.check_catalog(&store).await.unwrap();

        assert_eq!(report.summary.total, 1);
        assert_eq!(report.summary.has_updates, 1);
    }

    #[tokio::test]
    async fn check_catalog_propagates_store_failure() {
        let registry = MockVersionRegistry::new();
        let mut store = MockCatalogStore::new();
        store.expect_load().returning(|| {
            Err(CatalogError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no catalog",
            )))
        });

        let checker = UpdateChecker::new(registry, &fast_config());
        let result = checker.check_catalog(&store).await;

        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
