//! Tracking-parameter removal.
//!
//! Parses the query into ordered (key, values) pairs, drops denylisted keys
//! unless a keep-exception matches the host, and re-encodes the rest.
//! Scheme, host, path, and fragment pass through untouched; only the query
//! component ever changes.

mod query;

use url::Url;

use crate::rules::{normalize_host, Ruleset};
use query::QueryPairs;

/// Strips denylisted query parameters from `url`.
///
/// Returns the cleaned URL and the removed parameter names (original
/// casing, one entry per key, in order of appearance). The input comes back
/// byte-identical when nothing is removed, and unchanged on any parse
/// failure — cleaning degrades, it never fails.
pub fn strip_tracking(url: &str, rules: &Ruleset) -> (String, Vec<String>) {
    match try_strip(url, rules) {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!(url, error = %err, "query filtering failed; passing URL through");
            (url.to_string(), Vec::new())
        }
    }
}

fn try_strip(url: &str, rules: &Ruleset) -> Result<(String, Vec<String>), url::ParseError> {
    let mut parsed = Url::parse(url)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Ok((url.to_string(), Vec::new()));
    }
    if parsed.query().is_none() {
        return Ok((url.to_string(), Vec::new()));
    }
    let host = normalize_host(parsed.host_str().unwrap_or_default());

    let mut pairs = QueryPairs::from_url(&parsed);
    let removed = pairs.retain_keys(|key| !rules.is_tracking_param(key, &host));
    if removed.is_empty() {
        return Ok((url.to_string(), Vec::new()));
    }

    if pairs.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.set_query(Some(&pairs.encode()));
    }
    Ok((parsed.to_string(), removed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(url: &str) -> (String, Vec<String>) {
        strip_tracking(url, &Ruleset::default())
    }

    #[test]
    fn removes_utm_parameters() {
        let (cleaned, removed) =
            strip("https://reddit.com/r/rust/?utm_source=share&utm_medium=web");
        assert_eq!(cleaned, "https://reddit.com/r/rust/");
        assert_eq!(removed, vec!["utm_source".to_string(), "utm_medium".to_string()]);
    }

    #[test]
    fn keeps_non_tracking_parameters() {
        let (cleaned, removed) =
            strip("https://youtube.com/watch?v=dQw4w9WgXcQ&fbclid=abc123");
        assert_eq!(cleaned, "https://youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(removed, vec!["fbclid".to_string()]);
    }

    #[test]
    fn untouched_query_passes_through_byte_identical() {
        let url = "https://example.com/search?q=a%20b&page=2&q=c";
        let (cleaned, removed) = strip(url);
        assert_eq!(cleaned, url);
        assert!(removed.is_empty());
    }

    #[test]
    fn timestamp_kept_on_video_hosts_only() {
        let (cleaned, removed) = strip("https://youtu.be/dQw4w9WgXcQ?t=30&si=xyz");
        assert_eq!(cleaned, "https://youtu.be/dQw4w9WgXcQ?t=30");
        assert_eq!(removed, vec!["si".to_string()]);

        let (cleaned, removed) = strip("https://x.com/user/status/123?t=abc");
        assert_eq!(cleaned, "https://x.com/user/status/123");
        assert_eq!(removed, vec!["t".to_string()]);
    }

    #[test]
    fn removal_recorded_once_per_key_with_original_casing() {
        let (cleaned, removed) =
            strip("https://x.com/user/status/1?UTM_Source=a&UTM_Source=b&s=20");
        assert_eq!(cleaned, "https://x.com/user/status/1");
        assert_eq!(removed, vec!["UTM_Source".to_string(), "s".to_string()]);
    }

    #[test]
    fn emptied_query_leaves_no_question_mark() {
        let (cleaned, _) = strip("https://x.com/user/status/1?utm_source=t.co");
        assert!(!cleaned.contains('?'));
    }

    #[test]
    fn fragment_and_path_preserved() {
        let (cleaned, removed) =
            strip("https://reddit.com/r/rust/comments/1?utm_source=share&sort=top#comment-7");
        assert_eq!(
            cleaned,
            "https://reddit.com/r/rust/comments/1?sort=top#comment-7"
        );
        assert_eq!(removed, vec!["utm_source".to_string()]);
    }

    #[test]
    fn unparseable_input_passes_through() {
        let (cleaned, removed) = strip("https://");
        assert_eq!(cleaned, "https://");
        assert!(removed.is_empty());
    }
}
