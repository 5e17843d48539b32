//! Logging subscriber initialisation.

use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::observability::{LogFormat, LoggingConfig};

use super::ObservabilityError;

/// `RUST_LOG` wins when set; otherwise the configured level, with the HTTP
/// stack kept quiet below warnings.
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},hyper=warn,h2=warn", config.log_level)))
}

pub(super) fn init_subscriber(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let format_layer = match config.log_format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .flatten_event(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(format_layer)
        .with(env_filter(config))
        .try_init()?;

    Ok(())
}
