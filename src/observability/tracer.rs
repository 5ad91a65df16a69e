//! Span exporter that appends OTLP JSON to the rotating trace file.

use super::file_writer::RotatingWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes every exported batch as one line of the trace file.
///
/// Exports after [`SpanExporter::shutdown`] are rejected.
struct TraceFileExporter {
    writer: RotatingWriter,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl TraceFileExporter {
    const fn new(path: PathBuf, resource: Resource) -> Self {
        Self {
            writer: RotatingWriter::new(path),
            formatter: SpanFormatter::new(resource),
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("trace file exporter is shut down"));
        }
        let document = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&document)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for TraceFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        future::ready(self.write(&batch)).boxed()
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    // The resource is fixed at construction.
    fn set_resource(&mut self, _resource: &Resource) {}
}

impl std::fmt::Debug for TraceFileExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceFileExporter")
            .field("writer", &self.writer)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Builds a provider that exports each finished span immediately.
///
/// The plugin runs single-threaded inside the WASM host, so the simple
/// exporter is used instead of a batching one that would need a runtime.
pub fn create_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = TraceFileExporter::new(path, resource.clone());

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;

    fn exporter(dir: &tempfile::TempDir) -> (TraceFileExporter, PathBuf) {
        let path = dir.path().join("spans.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "test")]);
        (TraceFileExporter::new(path.clone(), resource), path)
    }

    #[test]
    fn each_batch_is_one_json_line() {
        let dir = tempfile::tempdir().unwrap();
        let (exporter, path) = exporter(&dir);

        exporter.write(&[]).unwrap();
        exporter.write(&[]).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let doc: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(doc["resourceSpans"].is_array());
        }
    }

    #[test]
    fn rejects_exports_after_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let (mut exporter, path) = exporter(&dir);

        exporter.shutdown();

        assert!(exporter.write(&[]).is_err());
        assert!(!path.exists());
    }
}
