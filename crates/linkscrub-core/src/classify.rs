//! Supported-platform classification.

use url::Url;

use crate::rules::{normalize_host, Ruleset};

/// True when the URL's host belongs to a supported platform.
///
/// Hosts are lower-cased, stripped of a leading `www.`, and matched against
/// the supported-domain list at label boundaries, so subdomains qualify.
/// Fail-closed: anything that does not parse as a URL with a host is
/// unsupported, and unclassifiable input can never reach the rewriter.
pub fn is_supported_platform(url: &str, rules: &Ruleset) -> bool {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => rules.is_supported_host(&normalize_host(host)),
            None => false,
        },
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supported(url: &str) -> bool {
        is_supported_platform(url, &Ruleset::default())
    }

    #[test]
    fn known_platforms_match() {
        assert!(supported("https://x.com/user/status/123"));
        assert!(supported("https://www.youtube.com/watch?v=abc"));
        assert!(supported("https://old.reddit.com/r/rust/"));
    }

    #[test]
    fn subdomains_match() {
        assert!(supported("https://m.youtube.com/watch?v=abc"));
        assert!(supported("https://music.youtube.com/playlist?list=x"));
    }

    #[test]
    fn unknown_hosts_do_not_match() {
        assert!(!supported("https://example.com/page?foo=bar"));
        assert!(!supported("https://notyoutube.com/watch"));
    }

    #[test]
    fn unparseable_input_fails_closed() {
        assert!(!supported("not a url at all"));
        assert!(!supported(""));
    }
}
