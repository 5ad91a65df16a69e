//! Catalog wire types.
//!
//! These types mirror the JSON returned by the marketplace API. Fields the
//! plugin never reads are ignored during decoding; optional blocks decode to
//! `None` or sensible defaults so a sparse listing still renders.

use serde::{Deserialize, Serialize};

/// Shipping block shared by summaries and details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipping {
    #[serde(default)]
    pub free_shipping: bool,
}

/// Seller reference embedded in a search result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerRef {
    #[serde(default)]
    pub id: u64,
}

/// A search result card.
///
/// Immutable snapshot from a search response; the list is replaced wholesale
/// on every search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub currency_id: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub shipping: Shipping,
    #[serde(default)]
    pub seller: SellerRef,
}

impl Product {
    #[must_use]
    pub const fn free_shipping(&self) -> bool {
        self.shipping.free_shipping
    }

    #[must_use]
    pub const fn seller_id(&self) -> u64 {
        self.seller.id
    }
}

/// A picture attached to an item listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub secure_url: String,
}

/// A single technical attribute of an item (brand, model, color...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttribute {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub value_name: Option<String>,
}

/// Full item detail shown in the modal.
///
/// Created when a card is selected and discarded when the modal closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub currency_id: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub sold_quantity: u64,
    #[serde(default)]
    pub shipping: Option<Shipping>,
    #[serde(default)]
    pub pictures: Option<Vec<Picture>>,
    #[serde(default)]
    pub thumbnail: String,
    pub permalink: String,
    #[serde(default)]
    pub attributes: Option<Vec<ProductAttribute>>,
}

impl ProductDetails {
    /// Portuguese label for the listing condition.
    ///
    /// Anything other than `"new"` is reported as used, matching how the
    /// marketplace only distinguishes the two in its public listings.
    #[must_use]
    pub fn condition_label(&self) -> &'static str {
        if self.condition == "new" {
            "Novo"
        } else {
            "Usado"
        }
    }

    #[must_use]
    pub fn free_shipping(&self) -> bool {
        self.shipping.as_ref().is_some_and(|s| s.free_shipping)
    }

    /// The main image: first picture, or the listing thumbnail.
    #[must_use]
    pub fn primary_image(&self) -> &str {
        self.pictures
            .as_ref()
            .and_then(|pictures| pictures.first())
            .map_or(self.thumbnail.as_str(), |p| p.secure_url.as_str())
    }

    /// Up to five gallery images, only when there is more than one picture.
    #[must_use]
    pub fn gallery(&self) -> Vec<&str> {
        match &self.pictures {
            Some(pictures) if pictures.len() > 1 => pictures
                .iter()
                .take(5)
                .map(|p| p.secure_url.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Seller reputation block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerReputation {
    #[serde(default)]
    pub level_id: Option<String>,
}

/// Seller information shown beside the item detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerDetails {
    pub id: u64,
    pub nickname: String,
    #[serde(default)]
    pub seller_reputation: Option<SellerReputation>,
}

impl SellerDetails {
    /// Reputation tier, or "Novo Vendedor" when the seller has none yet.
    #[must_use]
    pub fn reputation_label(&self) -> &str {
        self.seller_reputation
            .as_ref()
            .and_then(|r| r.level_id.as_deref())
            .filter(|level| !level.is_empty())
            .unwrap_or("Novo Vendedor")
    }
}

/// Top-level catalog category. Fetched once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// One selectable value of a facet, with its result count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub results: u64,
}

/// A facet offered alongside search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableFilter {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub values: Vec<FilterValue>,
}

/// Facet already applied to a search; only its id is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetRef {
    pub id: String,
}

/// Body of a search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Product>,
    #[serde(default)]
    pub available_filters: Option<Vec<AvailableFilter>>,
    #[serde(default)]
    pub filters: Option<Vec<FacetRef>>,
}

impl SearchResponse {
    /// Every facet id mentioned by the response, applied ones first.
    #[must_use]
    pub fn facet_ids(&self) -> Vec<String> {
        let applied = self.filters.iter().flatten().map(|f| f.id.clone());
        let available = self.available_filters.iter().flatten().map(|f| f.id.clone());
        let mut ids: Vec<String> = Vec::new();
        for id in applied.chain(available) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}
