//! Domain substitution for privacy front-ends.
//!
//! Runs on the already-cleaned URL, after parameter filtering. A rewrite
//! applies at most once: the normalized host must map exactly to a
//! convertible platform and the path must contain the rule's marker.
//! Only the host changes; scheme, path, query, and fragment are kept.

use url::Url;

use crate::rules::{normalize_host, Ruleset};

/// Substitutes the host of `url` per the configured rewrite rules.
///
/// Returns the (possibly) rewritten URL and whether a substitution
/// happened. Any parse failure returns the input unchanged.
pub fn rewrite_host(url: &str, rules: &Ruleset) -> (String, bool) {
    let mut parsed = match Url::parse(url) {
        Ok(p) => p,
        Err(err) => {
            tracing::warn!(url, error = %err, "rewrite skipped: URL failed to parse");
            return (url.to_string(), false);
        }
    };

    let host = match parsed.host_str() {
        Some(h) => normalize_host(h),
        None => return (url.to_string(), false),
    };
    let rule = match rules.rewrite_for_host(&host) {
        Some(r) => r,
        None => return (url.to_string(), false),
    };
    if !parsed.path().contains(&rule.path_marker) {
        return (url.to_string(), false);
    }

    if let Err(err) = parsed.set_host(Some(&rule.replacement_host)) {
        tracing::warn!(url, error = %err, "rewrite skipped: replacement host rejected");
        return (url.to_string(), false);
    }
    (parsed.to_string(), true)
}
