//! Subscriber installation.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the trace output inside the data directory.
pub const TRACE_FILE_NAME: &str = "promptfolio-otlp.json";

const SERVICE_NAME: &str = "Promptfolio";
const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// The filter comes from `config.trace_level` (an `EnvFilter` directive such
/// as `"debug"` or `"promptfolio::catalog=trace"`), defaulting to `info`.
/// Spans go to `<data dir>/promptfolio-otlp.json`.
///
/// Only the first call in a process installs anything. If the data directory
/// cannot be created, tracing stays disabled.
///
/// ```no_run
/// use promptfolio::observability::init_tracing;
/// use promptfolio::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .as_deref()
        .unwrap_or(DEFAULT_TRACE_LEVEL);

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = exporter::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
