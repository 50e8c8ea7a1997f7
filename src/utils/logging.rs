//! Minimal logging setup.

use env_logger::{Builder, Env};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper_util=warn";

/// Installs the global logger. Safe to call more than once.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_target(false)
        .try_init();
}
