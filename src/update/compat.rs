//! Eligibility against the target environment and side classification

use crate::catalog::types::TargetEnvironment;
use crate::update::types::{Category, RemoteVersionRecord, SupportLevel};

/// Whether a candidate version can run on the configured server
///
/// Exact membership in the candidate's declared sets, no range logic. An
/// empty target game version or an unset target loader disables that
/// dimension.
pub fn is_compatible(candidate: &RemoteVersionRecord, target: &TargetEnvironment) -> bool {
    let game_ok = target.game_version.is_empty()
        || candidate
            .game_versions
            .iter()
            .any(|v| v == &target.game_version);

    let loader_ok = match target.loader {
        None => true,
        Some(loader) => candidate.loaders.iter().any(|l| l == loader.as_str()),
    };

    game_ok && loader_ok
}

/// Classify which side(s) a version is needed on
///
/// Priority order: a server-required version is `server-only`, otherwise a
/// client-required one is `client-only`, otherwise `both`.
pub fn classify(candidate: &RemoteVersionRecord) -> Category {
    if candidate.server_side == SupportLevel::Required {
        Category::ServerOnly
    } else if candidate.client_side == SupportLevel::Required {
        Category::ClientOnly
    } else {
        Category::Both
    }
}
