use crate::types::LogLevel;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr tracing subscriber for the chosen level.
///
/// Stdout stays reserved for command output so `--format json` can be piped.
pub fn init_logging(level: LogLevel) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level.to_string()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
