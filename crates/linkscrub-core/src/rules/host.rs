//! Host normalization and domain matching.

/// Lower-cases a host and strips one leading `www.`.
pub fn normalize_host(host: &str) -> String {
    let lower = host.to_ascii_lowercase();
    match lower.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => lower,
    }
}

/// True when `host` is `domain` itself or a subdomain of it.
///
/// Matching is anchored at label boundaries: `m.youtube.com` matches
/// `youtube.com`, but a host that merely embeds the domain as a substring
/// (`notyoutube.com`, `youtube.com.evil.example` is a subdomain of
/// `com.evil.example`, not of `youtube.com`) does not.
pub fn host_matches_domain(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_strips_www() {
        assert_eq!(normalize_host("WWW.YouTube.COM"), "youtube.com");
        assert_eq!(normalize_host("m.youtube.com"), "m.youtube.com");
        // Only one leading www. is stripped.
        assert_eq!(normalize_host("www.www.example.com"), "www.example.com");
    }

    #[test]
    fn domain_match_exact_and_subdomain() {
        assert!(host_matches_domain("youtube.com", "youtube.com"));
        assert!(host_matches_domain("m.youtube.com", "youtube.com"));
        assert!(host_matches_domain("music.m.youtube.com", "youtube.com"));
    }

    #[test]
    fn domain_match_rejects_embedded_substrings() {
        assert!(!host_matches_domain("notyoutube.com", "youtube.com"));
        assert!(!host_matches_domain("youtube.com.evil.example", "youtube.com"));
        assert!(!host_matches_domain("amazon.computer.example", "amazon.com"));
    }
}
