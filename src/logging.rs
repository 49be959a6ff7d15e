//! Diagnostic logging setup.
//!
//! Standard output carries the generated document, so logs go to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "MINT_RELEASE_TASKS_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs the global stderr subscriber.
///
/// Later calls are no-ops, so tests and embedders may call this freely.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
    }
}
