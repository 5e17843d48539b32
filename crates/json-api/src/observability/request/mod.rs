//! Request-level logging and request IDs.

mod request_ids;

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, Span, error, info, warn};

use crate::config::observability::LoggingConfig;

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// Middleware that tags every request with an id, runs the rest of the chain
/// inside an `http.request` span and logs the outcome.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLogger {
    slow_threshold: Duration,
}

impl RequestLogger {
    pub(crate) fn new(slow_threshold: Duration) -> Self {
        Self { slow_threshold }
    }

    pub(crate) fn from_config(config: &LoggingConfig) -> Self {
        Self::new(config.slow_request_threshold())
    }

    fn log_completion(&self, span: &Span, status: StatusCode, elapsed: Duration) {
        let duration_ms = elapsed.as_millis();

        span.record("status", status.as_u16());
        span.record("duration_ms", duration_ms);

        let _entered = span.enter();

        if status.is_server_error() {
            error!(status = status.as_u16(), duration_ms, "request failed");
        } else if status.is_client_error() {
            warn!(status = status.as_u16(), duration_ms, "request rejected");
        } else {
            info!(status = status.as_u16(), duration_ms, "request completed");
        }

        if elapsed > self.slow_threshold {
            warn!(
                duration_ms,
                threshold_ms = self.slow_threshold.as_millis(),
                "slow request"
            );
        }
    }
}

#[handler]
impl RequestLogger {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let started = Instant::now();

        let request_id =
            request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

        request_ids::set_request_id_header(res, &request_id);

        let span = tracing::info_span!(
            parent: None,
            "http.request",
            request_id = %request_id,
            method = %req.method(),
            path = %req.uri().path(),
            remote_addr = %req.remote_addr(),
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        );

        depot.insert(REQUEST_ID_DEPOT_KEY, request_id);

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;

        self.log_completion(
            &span,
            res.status_code.unwrap_or(StatusCode::OK),
            started.elapsed(),
        );
    }
}
