//! `linkscrub run` – watch the clipboard and clean copied URLs in place.

use anyhow::Result;
use linkscrub_core::config::CleanerConfig;
use linkscrub_core::pipeline::Cleaner;
use linkscrub_core::watcher;

pub async fn run_watch(cfg: &CleanerConfig, cleaner: &Cleaner) -> Result<()> {
    println!(
        "linkscrub watching the clipboard (pid {}), ctrl-c to stop",
        std::process::id()
    );
    let stats = watcher::run(cfg, cleaner).await?;
    println!(
        "Stopped. Cleaned {} URLs ({} errors).",
        stats.cleaned, stats.errors
    );
    Ok(())
}
