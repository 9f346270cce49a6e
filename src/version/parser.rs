//! Free-form version strings → ordered numeric representation

use std::cmp::Ordering;

/// Ranks appended for keyword pre-release tags; a full release pads with 0
/// at the same position, so any tagged build sorts below it.
const ALPHA_RANK: i64 = -3;
const BETA_RANK: i64 = -2;
const RC_RANK: i64 = -1;

/// An ordered sequence of signed integers derived from a version string
///
/// Later elements carry lower significance. A pre-release tag contributes a
/// synthetic trailing negative element, which is what makes
/// `1.0.0-beta < 1.0.0` hold: the release side pads with `0` at that
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion(Vec<i64>);

impl ParsedVersion {
    pub fn parts(&self) -> &[i64] {
        &self.0
    }
}

impl Ord for ParsedVersion {
    /// Pads the shorter sequence with zeros, then compares element-wise.
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.0.len().max(other.0.len());
        for i in 0..len {
            let a = self.0.get(i).copied().unwrap_or(0);
            let b = other.0.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for ParsedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parse a free-form version string into a [`ParsedVersion`]
///
/// Handles `v` prefixes, game-version prefixes (`1.21.1-6.0.9` parses as
/// `6.0.9`), and keyword or numeric pre-release tags. Never fails:
/// non-numeric parts degrade to `0`, the empty string parses as `[0]`.
pub fn parse(version: &str) -> ParsedVersion {
    let cleaned = strip_v_prefix(version.trim());
    let (main, tag) = split_main_and_tag(cleaned);

    let mut parts: Vec<i64> = main
        .split('.')
        .map(|p| p.parse::<i64>().unwrap_or(0))
        .collect();

    if let Some(tag) = tag {
        parts.push(prerelease_rank(tag));
    }

    ParsedVersion(parts)
}

/// Strip a single leading case-insensitive `v`
pub(crate) fn strip_v_prefix(version: &str) -> &str {
    version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version)
}

/// Split a cleaned version string into the mod-version main segment and an
/// optional pre-release/build tag.
///
/// Strings published for a specific game version often carry the game
/// version as a prefix (`1.21.1-6.0.9`). Scanning the `-`/`+`-delimited
/// segments from the back, the last segment that begins with a digit starts
/// the mod's own version; everything before it is discarded. When no
/// segment starts with a digit, the whole string is the main segment.
fn split_main_and_tag(cleaned: &str) -> (&str, Option<&str>) {
    let segments: Vec<&str> = cleaned.split(['-', '+']).collect();
    if segments.len() < 2 {
        return (cleaned, None);
    }

    let Some(main_idx) = segments
        .iter()
        .rposition(|s| s.chars().next().is_some_and(|c| c.is_ascii_digit()))
    else {
        return (cleaned, None);
    };

    let main = segments[main_idx];
    if main_idx + 1 < segments.len() {
        // Tag starts right after the main segment in the original string
        let offset = segments[..=main_idx].iter().map(|s| s.len() + 1).sum::<usize>();
        (main, Some(&cleaned[offset..]))
    } else {
        (main, None)
    }
}

/// Rank a pre-release/build tag as a trailing negative element
///
/// Keywords rank `alpha < beta < rc/pre`; otherwise a digit run in the tag
/// is negated (`-SNAPSHOT.3` → `-3`), and an unrecognized tag counts as a
/// generic pre-release.
fn prerelease_rank(tag: &str) -> i64 {
    let lower = tag.to_ascii_lowercase();
    if lower.contains("alpha") {
        ALPHA_RANK
    } else if lower.contains("beta") {
        BETA_RANK
    } else if lower.contains("rc") || lower.contains("pre") {
        RC_RANK
    } else if let Some(n) = first_digit_run(&lower) {
        -n
    } else {
        RC_RANK
    }
}

/// First run of consecutive ASCII digits in `s`, parsed as an integer
fn first_digit_run(s: &str) -> Option<i64> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let rest = &s[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}
