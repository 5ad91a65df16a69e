//! Request tags for catalog fetches.
//!
//! Every web request carries a serialized [`CatalogRequest`] in its context
//! map. The host hands that map back untouched with the response, which is
//! how a response is matched to the operation that issued it. The tag also
//! carries the tracing context of the span that issued the request, so the
//! response handling can be recorded under the same trace.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{BuscaError, Result};

/// Context map key under which the request tag travels.
pub const REQUEST_TAG_KEY: &str = "mercado_busca_request";

/// Tracing context captured when a request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span ID of the span that issued the request.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry context of the current tracing span.
    ///
    /// Returns `None` when there is no valid span, e.g. when tracing was never
    /// initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Rebuilds the issuing span as a remote parent.
    ///
    /// Returns `None` when either id is not valid hex.
    #[must_use]
    pub fn remote_context(&self) -> Option<opentelemetry::Context> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;
        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

        Some(opentelemetry::Context::new().with_remote_span_context(span_context))
    }
}

/// Generates constructors that stamp each request with the current trace context.
macro_rules! catalog_request_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl CatalogRequest {
            $(
                #[doc = concat!("Creates a `", stringify!($variant), "` request tagged with the current trace context.")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

catalog_request_builders! {
    categories(Categories {}),
    search(Search { url: String }),
    item(Item { item_id: String, ticket: u64 }),
    seller(Seller { seller_id: u64, ticket: u64 }),
}

/// One fetch against the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogRequest {
    /// Top-level categories of the configured site.
    Categories {
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Product search. The URL is fully built by the query builder.
    Search {
        url: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Item details for the detail modal.
    Item {
        item_id: String,

        /// Detail selection this fetch belongs to.
        ticket: u64,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Seller details for the detail modal.
    Seller {
        seller_id: u64,

        /// Detail selection this fetch belongs to.
        ticket: u64,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl CatalogRequest {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Categories { .. } => "categories",
            Self::Search { .. } => "search",
            Self::Item { .. } => "item",
            Self::Seller { .. } => "seller",
        }
    }

    /// Detail ticket, for item and seller requests.
    #[must_use]
    pub const fn ticket(&self) -> Option<u64> {
        match self {
            Self::Item { ticket, .. } | Self::Seller { ticket, .. } => Some(*ticket),
            Self::Categories { .. } | Self::Search { .. } => None,
        }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::Categories { trace_context }
            | Self::Search { trace_context, .. }
            | Self::Item { trace_context, .. }
            | Self::Seller { trace_context, .. } => trace_context.as_ref(),
        }
    }

    /// Serializes the request into a web request context map.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be serialized to JSON.
    pub fn to_context(&self) -> Result<BTreeMap<String, String>> {
        let tag = serde_json::to_string(self)?;
        Ok(BTreeMap::from([(REQUEST_TAG_KEY.to_string(), tag)]))
    }

    /// Recovers a request from the context map returned with a response.
    ///
    /// # Errors
    ///
    /// Returns [`BuscaError::Request`] if the tag is missing, or a decode
    /// error if it is not a valid request.
    pub fn from_context(context: &BTreeMap<String, String>) -> Result<Self> {
        let tag = context
            .get(REQUEST_TAG_KEY)
            .ok_or_else(|| BuscaError::Request(format!("missing `{REQUEST_TAG_KEY}` in response context")))?;
        Ok(serde_json::from_str(tag)?)
    }
}
