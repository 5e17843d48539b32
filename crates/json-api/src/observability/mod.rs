//! Logging setup and request tracing middleware.

use thiserror::Error;

use crate::config::observability::LoggingConfig;

mod logging;
mod request;

pub(crate) use request::RequestLogger;

#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    #[error("failed to install tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber.
pub(crate) fn init(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    logging::init_subscriber(config)
}
