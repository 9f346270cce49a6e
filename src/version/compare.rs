//! Total order over raw version strings, plus display formatting

use std::cmp::Ordering;

use crate::version::parser::{self, strip_v_prefix};

/// Compare two raw version strings
///
/// Parses both sides, pads the shorter with zeros, compares element-wise.
/// Strict total order modulo equal-after-padding values, so reductions
/// over it are order-independent.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    parser::parse(a).cmp(&parser::parse(b))
}

/// Whether `candidate` is strictly newer than `current`
pub fn is_newer(current: &str, candidate: &str) -> bool {
    compare_versions(current, candidate) == Ordering::Less
}

/// The version that never loses a pairwise comparison
///
/// Returns `None` for an empty list. Ties keep the earlier element.
pub fn latest_version(versions: &[String]) -> Option<&str> {
    versions
        .iter()
        .reduce(|best, v| {
            if compare_versions(best, v) == Ordering::Less {
                v
            } else {
                best
            }
        })
        .map(String::as_str)
}

/// Human-readable form of a version string
///
/// Strips a leading `v` and a baked-in game-version prefix: with multiple
/// `-`/`+` segments the last one wins when it starts with a digit,
/// otherwise the first. Display only; comparison always goes through
/// [`compare_versions`].
pub fn format_version(version: &str) -> String {
    let cleaned = strip_v_prefix(version.trim());
    let segments: Vec<&str> = cleaned.split(['-', '+']).collect();
    if segments.len() < 2 {
        return cleaned.to_string();
    }

    let last = segments[segments.len() - 1];
    if last.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        last.to_string()
    } else {
        segments[0].to_string()
    }
}
