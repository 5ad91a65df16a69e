//! Trace export for the plugin.
//!
//! Spans emitted through `tracing` are bridged into OpenTelemetry and written
//! as OTLP JSON lines to a rotating file in the plugin data directory:
//!
//! ```text
//! tracing → tracing-opentelemetry → TraceFileExporter → mercado-busca-otlp.json
//! ```
//!
//! Catalog requests carry the trace context of the span that issued them, so
//! a search and the response that completes it show up in the same trace
//! even though they arrive in separate plugin updates.
//!
//! The filter level comes from the `trace_level` plugin option and defaults
//! to `"info"`.
//!
//! ```rust
//! use mercado_busca::observability::init_tracing;
//! use mercado_busca::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("tracing ready");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};

#[cfg(test)]
pub(crate) use tracer::create_tracer_provider;
