use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &["anniversaries", "anniv_config", "anniv_core"];

const DEFAULT_LEVEL: &str = "warn";

/// Initializes the global tracing subscriber.
///
/// Logs go to stderr so the shell feed on stdout stays clean. `RUST_LOG`
/// overrides the default `warn` level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let default_filter = CRATE_TARGETS
            .iter()
            .map(|target| format!("{target}={DEFAULT_LEVEL}"))
            .collect::<Vec<_>>()
            .join(",");
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
