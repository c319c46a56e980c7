//! Compiled rule tables for the normalization engine.
//!
//! A [`Ruleset`] is built once from [`CleanerConfig`] at startup and treated
//! as immutable for the process lifetime. It answers the three questions the
//! pipeline asks: is this host a supported platform, is this query key
//! tracking noise on this host, and does this host have a domain rewrite.

mod host;

pub use host::{host_matches_domain, normalize_host};

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::config::CleanerConfig;

/// Domain substitution for one canonical platform.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    /// Host substituted in on activation.
    pub replacement_host: String,
    /// Substring that must occur in the URL path for the rule to fire.
    pub path_marker: String,
}

/// Keeps an otherwise-denylisted parameter on matching domains.
#[derive(Debug, Clone)]
struct KeepException {
    /// Lower-cased parameter name.
    param: String,
    /// Normalized domains (subdomains match).
    domains: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Ruleset {
    /// Lower-cased tracking parameter names.
    tracking: HashSet<String>,
    exceptions: Vec<KeepException>,
    /// Normalized supported domains for the classifier.
    supported: Vec<String>,
    /// Raw hostname -> canonical platform identifier.
    platforms: HashMap<String, String>,
    /// Canonical platform identifier -> rewrite rule.
    rewrites: HashMap<String, RewriteRule>,
}

impl Ruleset {
    pub fn from_config(cfg: &CleanerConfig) -> Self {
        let tracking = cfg
            .tracking_params
            .iter()
            .map(|p| p.to_ascii_lowercase())
            .collect();

        let exceptions = cfg
            .keep_exceptions
            .iter()
            .map(|e| KeepException {
                param: e.param.to_ascii_lowercase(),
                domains: e.domains.iter().map(|d| normalize_host(d)).collect(),
            })
            .collect();

        let supported = cfg
            .supported_domains
            .iter()
            .map(|d| normalize_host(d))
            .collect();

        // Each raw hostname maps to at most one platform; the first config
        // entry wins and later duplicates are dropped with a warning.
        let mut platforms: HashMap<String, String> = HashMap::new();
        let mut rewrites: HashMap<String, RewriteRule> = HashMap::new();
        for rule in &cfg.rewrites {
            for raw in &rule.hosts {
                match platforms.entry(normalize_host(raw)) {
                    Entry::Occupied(existing) => {
                        tracing::warn!(
                            host = %existing.key(),
                            kept = %existing.get(),
                            ignored = %rule.platform,
                            "duplicate rewrite host in config; keeping first mapping"
                        );
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(rule.platform.clone());
                    }
                }
            }
            match rewrites.entry(rule.platform.clone()) {
                Entry::Occupied(existing) => {
                    tracing::warn!(
                        platform = %existing.key(),
                        "duplicate rewrite platform in config; keeping first rule"
                    );
                }
                Entry::Vacant(slot) => {
                    slot.insert(RewriteRule {
                        replacement_host: normalize_host(&rule.replacement),
                        path_marker: rule.path_marker.clone(),
                    });
                }
            }
        }

        Self {
            tracking,
            exceptions,
            supported,
            platforms,
            rewrites,
        }
    }

    /// True when `key` should be stripped from a URL on `host`.
    ///
    /// `host` must already be normalized. The key is compared lower-cased;
    /// a keep-exception for the key on this host overrides the denylist.
    pub fn is_tracking_param(&self, key: &str, host: &str) -> bool {
        let lower = key.to_ascii_lowercase();
        if !self.tracking.contains(&lower) {
            return false;
        }
        !self.exceptions.iter().any(|e| {
            e.param == lower && e.domains.iter().any(|d| host_matches_domain(host, d))
        })
    }

    /// True when the normalized `host` belongs to a supported platform.
    pub fn is_supported_host(&self, host: &str) -> bool {
        self.supported.iter().any(|d| host_matches_domain(host, d))
    }

    /// Rewrite rule for an exact normalized hostname, if it belongs to a
    /// convertible platform.
    pub fn rewrite_for_host(&self, host: &str) -> Option<&RewriteRule> {
        self.rewrites.get(self.platforms.get(host)?)
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::from_config(&CleanerConfig::default())
    }
}
