//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays parseable for `--json` and `tool`
//! output. `DAYONE_LOG` takes an `EnvFilter` directive; `--verbose` raises
//! the default level when it is unset.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "DAYONE_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "dayone_core=debug,dayone=debug"
    } else {
        "warn"
    }
}
