//! Mount path matching logic.
//!
//! # Responsibilities
//! - Match a path against a single mount prefix (case-sensitive)
//! - Pick the most specific provider among many candidates
//!
//! # Design Decisions
//! - Literal string prefix test, not path-segment aware (`/home2` matches `/home`)
//! - Longest prefix wins; on equal length the first candidate seen wins
//! - No regex, O(n) scan over candidates

use crate::broker::types::ProviderInfo;

/// Matches a path against a mount prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns true if `path` starts with this prefix.
    ///
    /// An empty prefix never matches: a mount must own a real prefix.
    pub fn matches(&self, path: &str) -> bool {
        !self.prefix.is_empty() && path.starts_with(&self.prefix)
    }

    /// Length of the prefix in bytes, used to rank matches.
    pub fn specificity(&self) -> usize {
        self.prefix.len()
    }
}

/// Select the provider whose mount path is the longest prefix of `path`.
///
/// Candidates are scanned in order and only a strictly longer match replaces
/// the current one, so ties go to the earlier candidate.
pub fn longest_prefix_match<'a>(
    providers: &'a [ProviderInfo],
    path: &str,
) -> Option<&'a ProviderInfo> {
    let mut best: Option<(&ProviderInfo, usize)> = None;

    for provider in providers {
        let matcher = PathPrefixMatcher::new(provider.mount_path.as_str());
        if !matcher.matches(path) {
            continue;
        }
        let len = matcher.specificity();
        match best {
            Some((_, best_len)) if best_len >= len => {}
            _ => best = Some((provider, len)),
        }
    }

    best.map(|(provider, _)| provider)
}
