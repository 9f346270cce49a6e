//! Per-mod update resolution

use crate::catalog::types::{InstalledMod, TargetEnvironment};
use crate::update::compat::{classify, is_compatible};
use crate::update::types::{RemoteVersionRecord, UpdateCheckResult};
use crate::version::{compare_versions, format_version, is_newer};

/// Pick the best eligible upgrade for one mod
///
/// Candidates are scanned oldest-first, so the chosen version is the
/// smallest compatible step strictly newer than the installed one, not the
/// newest available overall. Keeps server upgrades incremental.
pub fn resolve(
    installed: &InstalledMod,
    candidates: &[RemoteVersionRecord],
    target: &TargetEnvironment,
) -> UpdateCheckResult {
    let current = installed.current_version.as_str();

    let mut sorted: Vec<&RemoteVersionRecord> = candidates.iter().collect();
    // Stable: equal versions keep their remote relative order
    sorted.sort_by(|a, b| compare_versions(&a.version_number, &b.version_number));

    let chosen = sorted
        .iter()
        .find(|c| is_newer(current, &c.version_number) && is_compatible(c, target));

    match chosen {
        Some(candidate) => UpdateCheckResult {
            mod_id: installed.id.clone(),
            name: installed.name.clone(),
            slug: installed.slug.clone(),
            current_version: format_version(current),
            target_version: format_version(&candidate.version_number),
            target_version_id: Some(candidate.id.clone()),
            has_update: true,
            release_date: Some(candidate.date_published),
            changelog: candidate.changelog.clone(),
            new_category: Some(classify(candidate)),
            error: false,
        },
        None => up_to_date(installed),
    }
}

/// Result for a mod with no qualifying upgrade (or no candidates at all)
pub fn up_to_date(installed: &InstalledMod) -> UpdateCheckResult {
    let current = installed.current_version.as_str();
    let display = if current.is_empty() {
        "?".to_string()
    } else {
        format_version(current)
    };

    UpdateCheckResult {
        mod_id: installed.id.clone(),
        name: installed.name.clone(),
        slug: installed.slug.clone(),
        current_version: display.clone(),
        target_version: display,
        target_version_id: None,
        has_update: false,
        release_date: None,
        changelog: None,
        new_category: None,
        error: false,
    }
}

/// Result for a mod whose remote lookup failed after retries
pub fn failed(installed: &InstalledMod) -> UpdateCheckResult {
    UpdateCheckResult {
        error: true,
        ..up_to_date(installed)
    }
}
