//! `linkscrub status` – print the last watcher status snapshot.

use anyhow::{Context, Result};
use linkscrub_core::status;

pub fn run_status() -> Result<()> {
    let snapshot =
        status::read_default().context("no watcher status found; has `linkscrub run` started?")?;
    println!("{:<10} {}", "STATE", snapshot.state);
    println!("{:<10} {}", "PID", snapshot.pid);
    println!("{:<10} {}", "STARTED", snapshot.started_at);
    println!("{:<10} {}", "UPDATED", snapshot.updated_at);
    println!("{:<10} {}s", "RUNTIME", snapshot.runtime_secs);
    println!("{:<10} {}", "CLEANED", snapshot.urls_cleaned);
    println!("{:<10} {}", "ERRORS", snapshot.errors);
    Ok(())
}
