//! Aggregation of per-mod results into the caller-facing report

use serde::{Deserialize, Serialize};

use crate::update::types::UpdateCheckResult;

/// Exact cardinalities of the result partitions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSummary {
    pub total: usize,
    pub has_updates: usize,
    pub up_to_date: usize,
    pub errors: usize,
}

/// What a check cycle returns to the caller
///
/// The detail list has changelogs stripped to bound response size; the
/// full text stays available on the unredacted results for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateReport {
    pub updates: Vec<UpdateCheckResult>,
    pub summary: CheckSummary,
}

impl UpdateReport {
    pub fn new(results: Vec<UpdateCheckResult>) -> Self {
        let summary = summarize(&results);
        let updates = results
            .into_iter()
            .map(|mut r| {
                r.changelog = None;
                r
            })
            .collect();
        Self { updates, summary }
    }
}

/// Partition results on their `has_update` and `error` flags
///
/// The flags are mutually exclusive per result, so the three buckets add
/// up to the total.
pub fn summarize(results: &[UpdateCheckResult]) -> CheckSummary {
    let has_updates = results.iter().filter(|r| r.has_update).count();
    let errors = results.iter().filter(|r| r.error).count();

    CheckSummary {
        total: results.len(),
        has_updates,
        up_to_date: results.len() - has_updates - errors,
        errors,
    }
}
