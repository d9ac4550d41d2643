//! Tracing subscriber setup for binaries and tests.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the `EnvFilter` directive.
pub const LOG_ENV: &str = "CZML_LOG";

/// Install a global fmt subscriber writing to stderr.
///
/// `level` overrides `CZML_LOG` when given. Returns false if a global
/// subscriber was already installed.
pub fn init_tracing(level: Option<&str>) -> bool {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing::subscriber::set_global_default(subscriber).is_ok()
}
