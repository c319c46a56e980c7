//! Clipboard watcher: poll, normalize, write back.
//!
//! The loop owns the only mutable resources in the system — the OS
//! clipboard handle and the run counters. The engine itself is pure, so the
//! per-observation decision lives in [`evaluate`] and is testable without a
//! clipboard; everything blocking stays here.

use std::time::Duration;

use arboard::Clipboard;
use thiserror::Error;

use crate::config::CleanerConfig;
use crate::pipeline::{ChangeSummary, Cleaner, Outcome};
use crate::status::StatusFile;
use crate::validate::MAX_CANDIDATE_LEN;

/// The loop aborts once this many write-back failures have accumulated.
const MAX_ERRORS: u64 = 50;

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
    #[error("watcher aborted after {0} errors")]
    TooManyErrors(u64),
}

/// Counters folded from pipeline outcomes over one watcher run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WatchStats {
    pub cleaned: u64,
    pub errors: u64,
}

/// Decides what one clipboard observation should do, without touching the
/// clipboard. `Some(summary)` means: write `summary.final_url` back.
fn evaluate(text: &str, last_seen: Option<&str>, cleaner: &Cleaner) -> Option<ChangeSummary> {
    if text.is_empty() || text.len() > MAX_CANDIDATE_LEN {
        return None;
    }
    if last_seen == Some(text) {
        return None;
    }
    match cleaner.normalize(text) {
        Outcome::Cleaned(summary) if summary.changed() => Some(summary),
        _ => None,
    }
}

fn poll_once(
    clipboard: &mut Clipboard,
    cleaner: &Cleaner,
    last_seen: &mut Option<String>,
    stats: &mut WatchStats,
) {
    // Non-text clipboard content is not an error, just nothing to do.
    let text = match clipboard.get_text() {
        Ok(t) => t,
        Err(_) => return,
    };

    let decision = evaluate(&text, last_seen.as_deref(), cleaner);
    if !text.is_empty() && text.len() <= MAX_CANDIDATE_LEN {
        // Remember even rejected content so it is not re-examined every poll.
        *last_seen = Some(text);
    }
    let Some(summary) = decision else { return };

    match clipboard.set_text(summary.final_url.as_str()) {
        Ok(()) => {
            // The clipboard now holds our own write; track it so the next
            // poll does not reprocess it.
            *last_seen = Some(summary.final_url.clone());
            stats.cleaned += 1;
            tracing::info!(
                removed = ?summary.removed_params,
                rewritten = summary.rewritten,
                url = %summary.final_url,
                "cleaned clipboard URL"
            );
        }
        Err(err) => {
            stats.errors += 1;
            tracing::warn!(error = %err, "clipboard write-back failed");
        }
    }
}

/// Runs the watcher until ctrl-c, or until the error budget is spent.
///
/// Writes a status snapshot on startup, refreshes it periodically, and
/// leaves a final "stopped" snapshot behind on the way out.
pub async fn run(cfg: &CleanerConfig, cleaner: &Cleaner) -> Result<WatchStats, WatchError> {
    let mut clipboard = Clipboard::new()?;
    let mut last_seen: Option<String> = None;
    let mut stats = WatchStats::default();

    // A broken status file downgrades to log-only operation.
    let status = match StatusFile::at_default_path() {
        Ok(s) => Some(s),
        Err(err) => {
            tracing::warn!(error = %err, "status file disabled");
            None
        }
    };
    write_status(&status, "running", &stats);

    let mut poll = tokio::time::interval(Duration::from_millis(cfg.poll_interval_ms.max(1)));
    let mut refresh = tokio::time::interval(Duration::from_secs(cfg.status_interval_secs.max(1)));
    // The first interval tick completes immediately; the startup write
    // above already covers it.
    refresh.tick().await;

    tracing::info!(interval_ms = cfg.poll_interval_ms, "clipboard watch started");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = refresh.tick() => write_status(&status, "running", &stats),
            _ = poll.tick() => {
                poll_once(&mut clipboard, cleaner, &mut last_seen, &mut stats);
                if stats.errors >= MAX_ERRORS {
                    write_status(&status, "stopped", &stats);
                    return Err(WatchError::TooManyErrors(stats.errors));
                }
            }
        }
    }

    tracing::info!(
        cleaned = stats.cleaned,
        errors = stats.errors,
        "clipboard watch stopped"
    );
    write_status(&status, "stopped", &stats);
    Ok(stats)
}

fn write_status(status: &Option<StatusFile>, state: &str, stats: &WatchStats) {
    if let Some(status) = status {
        if let Err(err) = status.write(state, stats) {
            tracing::warn!(error = %err, "status file update failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaner() -> Cleaner {
        Cleaner::default()
    }

    #[test]
    fn evaluate_cleans_a_tracked_url() {
        let summary = evaluate(
            "https://youtu.be/dQw4w9WgXcQ?t=30&si=xyz",
            None,
            &cleaner(),
        )
        .expect("should produce a write-back");
        assert_eq!(summary.final_url, "https://youtu.be/dQw4w9WgXcQ?t=30");
    }

    #[test]
    fn evaluate_skips_last_seen_content() {
        let url = "https://youtu.be/dQw4w9WgXcQ?si=xyz";
        assert!(evaluate(url, Some(url), &cleaner()).is_none());
        // Fresh content still processes.
        assert!(evaluate(url, Some("something else"), &cleaner()).is_some());
    }

    #[test]
    fn evaluate_skips_unchanged_urls() {
        // Already clean: writing it back would feed the watcher its own output.
        assert!(evaluate("https://youtu.be/dQw4w9WgXcQ?t=30", None, &cleaner()).is_none());
    }

    #[test]
    fn evaluate_skips_rejected_and_oversized_input() {
        assert!(evaluate("", None, &cleaner()).is_none());
        assert!(evaluate("not a url", None, &cleaner()).is_none());
        assert!(evaluate("https://example.com/page?utm_source=x", None, &cleaner()).is_none());
        let oversized = format!("https://youtu.be/x?si={}", "a".repeat(MAX_CANDIDATE_LEN));
        assert!(evaluate(&oversized, None, &cleaner()).is_none());
    }

    #[test]
    fn evaluate_handles_rewrite_only_changes() {
        let summary = evaluate("https://x.com/user/status/123", None, &cleaner())
            .expect("rewrite alone should trigger a write-back");
        assert!(summary.removed_params.is_empty());
        assert!(summary.rewritten);
        assert_eq!(summary.final_url, "https://fxtwitter.com/user/status/123");
    }
}
