//! `linkscrub clean <url>` – one-shot normalization of a single URL.

use anyhow::{bail, Result};
use linkscrub_core::pipeline::{Cleaner, Outcome, RejectReason};

pub fn run_clean(cleaner: &Cleaner, url: &str) -> Result<()> {
    match cleaner.normalize(url) {
        Outcome::Rejected(RejectReason::MalformedInput) => {
            bail!("not a valid http(s) URL: {url}")
        }
        Outcome::Rejected(RejectReason::UnsupportedPlatform) => {
            bail!("host is not a supported platform: {url}")
        }
        Outcome::Cleaned(summary) => {
            if summary.removed_params.is_empty() {
                println!("No tracking parameters found.");
            } else {
                println!("Removed: {}", summary.removed_params.join(", "));
            }
            if summary.rewritten {
                println!("Rewrote host to a privacy front-end.");
            }
            println!("{}", summary.final_url);
        }
    }
    Ok(())
}
