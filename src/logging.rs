use std::env;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` sets the filter (default `info`), `LOG_FORMAT=json` switches to
/// JSON lines. Calling this twice only logs a warning.
pub fn configure_logging() -> Result<(), tracing_subscriber::filter::ParseError> {
    let filter = EnvFilter::try_new(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stdout);

    let result = if env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };

    if let Err(e) = result {
        warn!("Failed to initialize logging, it may already be initialized: {e}");
    }

    Ok(())
}
