//! Candidate validation: decides whether clipboard text is a URL worth
//! processing at all. Pure predicate, no side effects.

use regex::Regex;
use std::sync::LazyLock;

/// Longest clipboard string treated as a URL candidate. Anything bigger is
/// assumed to be a pasted document, not a link.
pub const MAX_CANDIDATE_LEN: usize = 2048;

/// Shortest plausible URL with scheme, host, and trailing content.
pub const MIN_CANDIDATE_LEN: usize = 10;

/// Schemes that must never be written back to the clipboard.
static DANGEROUS_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(javascript|data|vbscript|file):").unwrap());

/// Full HTTP(S) grammar: scheme, `://`, a host of alphanumerics, dots and
/// hyphens with alphanumeric first/last char, then a `/`, `?` or `#`
/// delimiter. Requiring the delimiter rejects bare-host strings while still
/// accepting a lone trailing slash.
static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://[a-z0-9][a-z0-9.-]*[a-z0-9][/?#].*$").unwrap());

/// True when `text` is an admissible HTTP(S) URL candidate.
pub fn is_candidate_url(text: &str) -> bool {
    if text.len() > MAX_CANDIDATE_LEN {
        return false;
    }
    let text = text.trim();
    if text.len() < MIN_CANDIDATE_LEN {
        return false;
    }
    if DANGEROUS_SCHEME.is_match(text) {
        return false;
    }
    HTTP_URL.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_http_and_https() {
        assert!(is_candidate_url("https://example.com/page"));
        assert!(is_candidate_url("http://example.com/page?x=1"));
        assert!(is_candidate_url("HTTPS://EXAMPLE.COM/page"));
        assert!(is_candidate_url("https://example.com/"));
    }

    #[test]
    fn rejects_bare_host_without_trailing_content() {
        assert!(!is_candidate_url("https://example.com"));
        assert!(!is_candidate_url("http://youtube.com"));
    }

    #[test]
    fn rejects_length_bounds() {
        // Too short to be a URL, rejected before any parsing.
        assert!(!is_candidate_url("short"));
        assert!(!is_candidate_url(""));
        let long = format!("https://example.com/{}", "a".repeat(MAX_CANDIDATE_LEN));
        assert!(!is_candidate_url(&long));
    }

    #[test]
    fn rejects_dangerous_schemes() {
        assert!(!is_candidate_url("javascript:alert(1)"));
        assert!(!is_candidate_url("data:text/html,<script>alert(1)</script>"));
        assert!(!is_candidate_url("VBScript:msgbox(1)"));
        assert!(!is_candidate_url("file:///etc/passwd"));
    }

    #[test]
    fn rejects_non_url_text() {
        assert!(!is_candidate_url("just some sentence copied around"));
        assert!(!is_candidate_url("ftp://example.com/file"));
        assert!(!is_candidate_url("https://-bad-.com/page"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(is_candidate_url("  https://example.com/page \n"));
    }
}
