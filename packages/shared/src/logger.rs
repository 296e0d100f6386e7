//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the filter directive used when `RUST_LOG` is not set.
///
/// Binary names use hyphens while tracing targets use underscores, so the
/// name is normalized before it becomes a target.
fn default_directive(bin_name: &str, default_level: &str) -> String {
    let target = bin_name.replace('-', "_");
    format!("{target}={default_level},lodging_server={default_level},tower_http={default_level}")
}

/// Initialize the global tracing subscriber.
///
/// # Arguments
///
/// * `bin_name` - Name of the running binary (usually `env!("CARGO_BIN_NAME")`)
/// * `default_level` - Level applied when `RUST_LOG` is not set
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(bin_name, default_level)));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_line_number(true));

    match registry.try_init() {
        Ok(()) => tracing::debug!("Logger initialized for {}", bin_name),
        // A subscriber installed by the host process wins.
        Err(e) => eprintln!("Logger already initialized: {e}"),
    }
}
