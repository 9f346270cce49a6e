use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Check-cycle constants
// =============================================================================

/// Number of mods checked concurrently per batch
pub const DEFAULT_BATCH_SIZE: usize = 3;

/// Pacing delay between batches in milliseconds (rate-limit headroom)
pub const DEFAULT_BATCH_PAUSE_MS: u64 = 500;

/// Maximum fetch attempts per mod, including the first
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Base retry delay in milliseconds; attempt n waits n * base
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 1000;

/// Per-call HTTP timeout in milliseconds (10 seconds)
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

/// Check-cycle configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Mods checked concurrently per batch
    pub batch_size: usize,
    /// Pacing delay between batches in milliseconds
    pub batch_pause_ms: u64,
    /// Maximum fetch attempts per mod
    pub max_attempts: u32,
    /// Base retry delay in milliseconds
    pub retry_base_delay_ms: u64,
    /// Per-call HTTP timeout in milliseconds
    pub fetch_timeout_ms: u64,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            batch_pause_ms: DEFAULT_BATCH_PAUSE_MS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_base_delay_ms: DEFAULT_RETRY_BASE_DELAY_MS,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

impl CheckerConfig {
    pub fn batch_pause(&self) -> Duration {
        Duration::from_millis(self.batch_pause_ms)
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

/// Returns the path to the data directory for modwarden.
/// Uses $XDG_DATA_HOME/modwarden if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/modwarden,
/// or ./modwarden if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("modwarden.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("modwarden")
}
