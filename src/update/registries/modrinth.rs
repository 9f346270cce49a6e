//! Modrinth API registry implementation

use std::time::Duration;

use tracing::warn;

use crate::config::DEFAULT_FETCH_TIMEOUT_MS;
use crate::update::error::RegistryError;
use crate::update::registry::VersionRegistry;
use crate::update::types::RemoteVersionRecord;

/// Default base URL for the Modrinth API
pub const DEFAULT_BASE_URL: &str = "https://api.modrinth.com/v2";

/// Registry client for the Modrinth API
///
/// Lists a project's published versions via `GET /project/{id}/version`.
/// The per-call timeout bounds how long one attempt can stall its batch.
pub struct ModrinthRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl ModrinthRegistry {
    /// Creates a new ModrinthRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS))
    }

    /// Creates a new ModrinthRegistry with a custom base URL and timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("modwarden/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for ModrinthRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Parse a Retry-After header value (delay-seconds form only)
fn retry_after_secs(response: &reqwest::Response) -> Option<u64> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

#[async_trait::async_trait]
impl VersionRegistry for ModrinthRegistry {
    async fn fetch_versions(
        &self,
        mod_id: &str,
    ) -> Result<Vec<RemoteVersionRecord>, RegistryError> {
        let url = format!("{}/project/{}/version", self.base_url, mod_id);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(mod_id.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Modrinth rate limited request for {}", mod_id);
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after_secs(&response),
            });
        }

        if status == reqwest::StatusCode::BAD_GATEWAY
            || status == reqwest::StatusCode::SERVICE_UNAVAILABLE
        {
            warn!("Modrinth unavailable ({}): {}", status, url);
            return Err(RegistryError::Unavailable {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            warn!("Modrinth returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let versions: Vec<RemoteVersionRecord> = response.json().await.map_err(|e| {
            warn!("Failed to parse Modrinth version list: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(versions)
    }
}
