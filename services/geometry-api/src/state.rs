//! Application state for the geometry API.

use metrics_exporter_prometheus::PrometheusHandle;
use wkt_parser::GeometryParser;

use crate::config::ApiConfig;
use crate::metrics::MetricsCollector;

/// Shared application state.
///
/// Read-only after construction apart from the atomic counters.
pub struct AppState {
    pub config: ApiConfig,

    /// Parser using the configured default order.
    pub parser: GeometryParser,

    pub metrics: MetricsCollector,

    /// Prometheus recorder handle, when one is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            parser: GeometryParser::new(config.parser_config()),
            config,
            metrics: MetricsCollector::new(),
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
