// src/log.rs
use tracing_subscriber::{EnvFilter, fmt::time::uptime};

/// Install the stderr subscriber. Lines carry time elapsed since start.
/// `RUST_LOG` overrides the default filter. Safe to call more than once.
pub fn init(verbose: bool) {
    let default = if verbose { "tr_scrape=debug" } else { "tr_scrape=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(uptime())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
