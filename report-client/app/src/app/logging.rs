use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use super::config::LogFormat;

/// Initialize the tracing subscriber on stderr, leaving stdout to the report.
/// Defaults to `warn` unless `RUST_LOG` says otherwise.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init(),
    }
}
