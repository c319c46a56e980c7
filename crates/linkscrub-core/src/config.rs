use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// One domain substitution entry in config.toml (`[[rewrites]]`).
///
/// All `hosts` map to the same canonical `platform`; when a cleaned URL's
/// host is one of them and its path contains `path_marker`, the host is
/// replaced with `replacement`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteRuleConfig {
    /// Canonical platform identifier (e.g. "twitter").
    pub platform: String,
    /// Raw hostnames belonging to the platform.
    pub hosts: Vec<String>,
    /// Replacement host substituted on activation.
    pub replacement: String,
    /// Path substring that must be present for the rewrite to apply.
    pub path_marker: String,
}

/// One keep-exception entry (`[[keep_exceptions]]`): a denylisted parameter
/// that survives on the listed domains (and their subdomains).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeepExceptionConfig {
    pub param: String,
    pub domains: Vec<String>,
}

/// Global configuration loaded from `~/.config/linkscrub/config.toml`.
///
/// Every field has a baked-in default, so an empty file (or no file at all)
/// is a fully working deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Minimum delay between clipboard checks, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// How often the watcher refreshes the status file, in seconds.
    #[serde(default = "default_status_interval_secs")]
    pub status_interval_secs: u64,
    /// Query parameter names treated as tracking noise (compared lower-cased).
    #[serde(default = "default_tracking_params")]
    pub tracking_params: Vec<String>,
    /// Domains the cleaner acts on. Subdomains match automatically.
    #[serde(default = "default_supported_domains")]
    pub supported_domains: Vec<String>,
    /// Denylisted parameters that are kept anyway on specific domains.
    #[serde(default = "default_keep_exceptions")]
    pub keep_exceptions: Vec<KeepExceptionConfig>,
    /// Domain substitutions applied to cleaned URLs.
    #[serde(default = "default_rewrites")]
    pub rewrites: Vec<RewriteRuleConfig>,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            status_interval_secs: default_status_interval_secs(),
            tracking_params: default_tracking_params(),
            supported_domains: default_supported_domains(),
            keep_exceptions: default_keep_exceptions(),
            rewrites: default_rewrites(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    500
}

fn default_status_interval_secs() -> u64 {
    60
}

fn default_tracking_params() -> Vec<String> {
    [
        // Facebook/Meta
        "fbclid",
        "fb_action_ids",
        "fb_action_types",
        "fb_ref",
        "fb_source",
        "fb_comment_id",
        "comment_tracking",
        "notif_id",
        "notif_t",
        // Google Analytics & Ads
        "utm_source",
        "utm_medium",
        "utm_campaign",
        "utm_term",
        "utm_content",
        "utm_id",
        "utm_source_platform",
        "utm_creative_format",
        "utm_marketing_tactic",
        "gclid",
        "gclsrc",
        "dclid",
        "gbraid",
        "wbraid",
        "_ga",
        "_gl",
        // Twitter/X
        "t",
        "s",
        "ref_src",
        "ref_url",
        "twclid",
        "twitter-impression-id",
        // YouTube
        "feature",
        "kw",
        "si",
        "app",
        "persist_app",
        "noapp",
        "has_verified",
        "list",
        "index",
        "pp",
        "source_ve_path",
        "ab_channel",
        // Amazon
        "tag",
        "ref",
        "ref_",
        "pf_rd_m",
        "pf_rd_s",
        "pf_rd_r",
        "pf_rd_t",
        "pf_rd_p",
        "pf_rd_i",
        "pd_rd_i",
        "pd_rd_r",
        "pd_rd_w",
        "pd_rd_wg",
        "linkcode",
        "camp",
        "creative",
        "creativeasin",
        "ascsubtag",
        // Others
        "msclkid",
        "cvid",
        "trk",
        "trkinfo",
        "li_fat_id",
        "lipi",
        "utm_name",
        "rdt_cid",
        "share_id",
        "context",
        "is_copy_url",
        "sender_device",
        "sender_web_id",
        "tt_from",
        "igshid",
        "igsh",
        "img_index",
        "amp_analytics",
        "mc_cid",
        "mc_eid",
        "yclid",
        "ncid",
        "_hsenc",
        "_hsmi",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_supported_domains() -> Vec<String> {
    [
        "facebook.com",
        "fb.com",
        "m.facebook.com",
        "twitter.com",
        "x.com",
        "mobile.twitter.com",
        "youtube.com",
        "youtu.be",
        "m.youtube.com",
        "instagram.com",
        "m.instagram.com",
        "linkedin.com",
        "m.linkedin.com",
        "reddit.com",
        "old.reddit.com",
        "tiktok.com",
        "vm.tiktok.com",
        "amazon.com",
        "smile.amazon.com",
        "pinterest.com",
        "pin.it",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_keep_exceptions() -> Vec<KeepExceptionConfig> {
    // `t` is a playback timestamp on video hosts, not a tracker.
    vec![KeepExceptionConfig {
        param: "t".to_string(),
        domains: vec!["youtube.com".to_string(), "youtu.be".to_string()],
    }]
}

fn default_rewrites() -> Vec<RewriteRuleConfig> {
    vec![RewriteRuleConfig {
        platform: "twitter".to_string(),
        hosts: vec![
            "twitter.com".to_string(),
            "x.com".to_string(),
            "mobile.twitter.com".to_string(),
        ],
        replacement: "fxtwitter.com".to_string(),
        path_marker: "/status/".to_string(),
    }]
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkscrub")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CleanerConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CleanerConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CleanerConfig = toml::from_str(&data)?;
    Ok(cfg)
}
