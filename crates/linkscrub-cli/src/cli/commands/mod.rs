mod clean;
mod status;
mod watch;

pub use clean::run_clean;
pub use status::run_status;
pub use watch::run_watch;
