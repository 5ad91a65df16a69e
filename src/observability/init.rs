//! Subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name recorded on every exported resource and scope.
pub const SERVICE_NAME: &str = "Mercado Busca";

/// File name of the active trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "mercado-busca-otlp.json";

const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber with file-based OTLP export.
///
/// Observability is optional: when the data directory cannot be created the
/// plugin runs without a subscriber. Calling this more than once is harmless,
/// only the first subscriber is installed.
///
/// ```rust
/// use mercado_busca::observability::init_tracing;
/// use mercado_busca::Config;
///
/// let config = Config {
///     trace_level: Some("mercado_busca=debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .as_deref()
        .unwrap_or(DEFAULT_TRACE_LEVEL);

    let filter = match EnvFilter::try_new(level) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(DEFAULT_TRACE_LEVEL),
    };

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
