//! Status file: a small JSON snapshot of the most recent watcher run,
//! written to the XDG state dir so `linkscrub status` (or the operator
//! directly) can see whether the service is alive and what it has done.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::watcher::WatchStats;

const STATUS_FILE: &str = "status.json";

/// On-disk snapshot format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub pid: u32,
    /// "running" or "stopped".
    pub state: String,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub runtime_secs: i64,
    pub urls_cleaned: u64,
    pub errors: u64,
}

/// Writes status snapshots for one watcher run.
pub struct StatusFile {
    path: PathBuf,
    started_at: DateTime<Utc>,
}

impl StatusFile {
    /// Status file at the default location,
    /// `~/.local/state/linkscrub/status.json`.
    pub fn at_default_path() -> Result<Self> {
        Ok(Self::at_path(default_status_path()?))
    }

    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path,
            started_at: Utc::now(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the snapshot with the current counters.
    pub fn write(&self, state: &str, stats: &WatchStats) -> Result<()> {
        let now = Utc::now();
        let snapshot = StatusSnapshot {
            pid: std::process::id(),
            state: state.to_string(),
            started_at: self.started_at,
            updated_at: now,
            runtime_secs: (now - self.started_at).num_seconds(),
            urls_cleaned: stats.cleaned,
            errors: stats.errors,
        };
        fs::write(&self.path, serde_json::to_string_pretty(&snapshot)?)?;
        Ok(())
    }
}

fn default_status_path() -> Result<PathBuf> {
    let dir = xdg::BaseDirectories::with_prefix("linkscrub")?.get_state_home();
    fs::create_dir_all(&dir)?;
    Ok(dir.join(STATUS_FILE))
}

/// Reads the snapshot last written by a watcher, running or stopped.
pub fn read_default() -> Result<StatusSnapshot> {
    let path = default_status_path()?;
    let data = fs::read_to_string(&path)
        .with_context(|| format!("no status file at {}", path.display()))?;
    Ok(serde_json::from_str(&data)?)
}
