//! OTLP JSON encoding for exported spans.
//!
//! Each export batch becomes a single `resourceSpans` document so the trace
//! file stays line-delimited and readable by OTLP tooling.

use super::init::SERVICE_NAME;
use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::SystemTime;

/// Encodes span batches against a fixed resource.
pub struct SpanFormatter {
    resource: Resource,
}

impl SpanFormatter {
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Builds the OTLP document for one batch:
    ///
    /// ```json
    /// {"resourceSpans": [{
    ///   "resource": {"attributes": [{"key": "service.name", "value": {"stringValue": "Mercado Busca"}}]},
    ///   "scopeSpans": [{"scope": {"name": "Mercado Busca"}, "spans": [...]}]
    /// }]}
    /// ```
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attributes: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| key_value(key.as_str(), value))
            .collect();

        let spans: Vec<JsonValue> = batch.iter().map(span).collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attributes },
                "scopeSpans": [{
                    "scope": { "name": SERVICE_NAME },
                    "spans": spans,
                }],
            }],
        })
    }
}

fn span(data: &SpanData) -> JsonValue {
    let context = &data.span_context;
    let parent = if data.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", data.parent_span_id)
    };
    let (code, message) = status(&data.status);

    json!({
        "traceId": format!("{:032x}", context.trace_id()),
        "spanId": format!("{:016x}", context.span_id()),
        "parentSpanId": parent,
        "name": data.name,
        "kind": kind_code(&data.span_kind),
        "startTimeUnixNano": unix_nanos(data.start_time),
        "endTimeUnixNano": unix_nanos(data.end_time),
        "attributes": attributes(&data.attributes),
        "events": events(&data.events),
        "links": links(&data.links),
        "status": { "code": code, "message": message },
    })
}

/// OTLP encodes 64-bit timestamps as decimal strings.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default()
        .to_string()
}

const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

fn attributes(pairs: &[KeyValue]) -> Vec<JsonValue> {
    pairs
        .iter()
        .map(|kv| key_value(kv.key.as_str(), &kv.value))
        .collect()
}

fn key_value(key: &str, value: &Value) -> JsonValue {
    json!({ "key": key, "value": any_value(value) })
}

fn any_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        // arrays are flattened to their display form
        Value::Array(_) => json!({ "stringValue": value.to_string() }),
    }
}

fn events(events: &[Event]) -> Vec<JsonValue> {
    events
        .iter()
        .map(|event| {
            json!({
                "timeUnixNano": unix_nanos(event.timestamp),
                "name": event.name,
                "attributes": attributes(&event.attributes),
            })
        })
        .collect()
}

fn links(links: &[Link]) -> Vec<JsonValue> {
    links
        .iter()
        .map(|link| {
            json!({
                "traceId": format!("{:032x}", link.span_context.trace_id()),
                "spanId": format!("{:016x}", link.span_context.span_id()),
                "attributes": attributes(&link.attributes),
            })
        })
        .collect()
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn empty_batch_still_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
        let doc = SpanFormatter::new(resource).format_batch(&[]);

        let group = &doc["resourceSpans"][0];
        let attrs = group["resource"]["attributes"].as_array().unwrap();
        assert!(attrs.iter().any(|a| a["key"] == "service.name"
            && a["value"]["stringValue"] == SERVICE_NAME));
        assert_eq!(group["scopeSpans"][0]["scope"]["name"], SERVICE_NAME);
        assert_eq!(group["scopeSpans"][0]["spans"], json!([]));
    }

    #[test]
    fn integers_are_encoded_as_strings() {
        assert_eq!(any_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(any_value(&Value::Bool(true)), json!({ "boolValue": true }));
        assert_eq!(
            any_value(&Value::String("MLB".into())),
            json!({ "stringValue": "MLB" })
        );
    }

    #[test]
    fn timestamps_are_nanoseconds_since_epoch() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_millis(1500);
        assert_eq!(unix_nanos(time), "1500000000");
        assert_eq!(unix_nanos(SystemTime::UNIX_EPOCH), "0");
    }

    #[test]
    fn error_status_keeps_its_description() {
        let (code, message) = status(&Status::error("http 500"));
        assert_eq!(code, 2);
        assert_eq!(message, "http 500");
        assert_eq!(status(&Status::Ok), (1, String::new()));
    }
}
