//! Remote version records and per-mod check results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a mod must, may, or cannot run on a given side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    #[default]
    Required,
    Optional,
    Unsupported,
}

/// Which side(s) a mod version is needed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Both,
    ServerOnly,
    ClientOnly,
}

/// One published version of a mod, as returned by the remote catalog
///
/// Immutable snapshot fetched per check cycle. The side-support fields come
/// under two names depending on the remote endpoint (`*_side` on project
/// listings, `*_support` elsewhere) and default to `required` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteVersionRecord {
    pub id: String,
    pub version_number: String,
    pub date_published: DateTime<Utc>,
    #[serde(default)]
    pub changelog: Option<String>,
    #[serde(default)]
    pub game_versions: Vec<String>,
    #[serde(default)]
    pub loaders: Vec<String>,
    #[serde(default, alias = "client_support")]
    pub client_side: SupportLevel,
    #[serde(default, alias = "server_support")]
    pub server_side: SupportLevel,
}

/// Per-mod outcome of one check cycle
///
/// Created once per mod per cycle, never mutated afterwards. Version fields
/// are display-formatted; `error` marks mods whose remote lookup failed
/// after retries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCheckResult {
    pub mod_id: String,
    pub name: String,
    pub slug: String,
    pub current_version: String,
    pub target_version: String,
    pub target_version_id: Option<String>,
    pub has_update: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_category: Option<Category>,
    #[serde(default)]
    pub error: bool,
}
