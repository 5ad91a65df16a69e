//! Catalog client for the marketplace API.
//!
//! The plugin never performs I/O itself: requests are described here as
//! [`CatalogRequest`] values, sent by the plugin shim through the host's
//! `web_request`, and their responses come back as raw status and body bytes
//! to be turned into typed payloads by [`decode`].
//!
//! # Architecture
//!
//! - `query`: search URL builder
//! - `endpoints`: base URLs for the four read operations
//! - `request`: request tags that travel with each web request
//! - `response`: status check and JSON decoding

pub mod endpoints;
pub mod query;
pub mod request;
pub mod response;

pub use endpoints::{CatalogEndpoints, DEFAULT_API_BASE, DEFAULT_SITE_ID};
pub use query::{build_search_url, SearchCriteria};
pub use request::{CatalogRequest, TraceContext, REQUEST_TAG_KEY};
pub use response::{decode, CatalogPayload};
