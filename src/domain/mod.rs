//! Domain layer for the Mercado Busca plugin.
//!
//! This module contains the catalog data model, the search criteria and the
//! filter state store, independent of Zellij-specific APIs or rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`product`]: Wire types returned by the catalog API
//! - [`criteria`]: Sort and condition enums with their wire values
//! - [`filters`]: The filter state store mutated by the sidebar
//!
//! # Examples
//!
//! ```
//! use mercado_busca::domain::{Condition, FilterState};
//!
//! let mut filters = FilterState::default();
//! filters.set_condition(Condition::New);
//! filters.set_facet_value("BRAND", "206", true);
//! assert_eq!(filters.selected_values("BRAND"), ["206".to_string()]);
//! ```

pub mod criteria;
pub mod error;
pub mod filters;
pub mod product;

pub use criteria::{Condition, SortMode};
pub use error::{BuscaError, Result};
pub use filters::{FilterState, PriceBound};
pub use product::{
    AvailableFilter, Category, FacetRef, FilterValue, Product, ProductAttribute, ProductDetails,
    SearchResponse, SellerDetails,
};
