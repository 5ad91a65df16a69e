//! Endpoint URLs for the catalog API.

use super::CatalogRequest;

pub const DEFAULT_API_BASE: &str = "https://api.mercadolibre.com";
pub const DEFAULT_SITE_ID: &str = "MLB";

/// Base URLs of the four read operations, resolved once from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEndpoints {
    api_base: String,
    site_id: String,
    search: String,
}

impl CatalogEndpoints {
    /// Creates the endpoint set. Without an explicit search endpoint the
    /// site's default `/sites/{site}/search` is used.
    #[must_use]
    pub fn new(api_base: &str, site_id: &str, search_endpoint: Option<&str>) -> Self {
        let api_base = api_base.trim_end_matches('/').to_string();
        let search = search_endpoint
            .map(|s| s.trim_end_matches(['/', '?']).to_string())
            .unwrap_or_else(|| format!("{api_base}/sites/{site_id}/search"));

        Self {
            api_base,
            site_id: site_id.to_string(),
            search,
        }
    }

    #[must_use]
    pub fn categories(&self) -> String {
        format!("{}/sites/{}/categories", self.api_base, self.site_id)
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn item(&self, item_id: &str) -> String {
        format!("{}/items/{item_id}", self.api_base)
    }

    #[must_use]
    pub fn seller(&self, seller_id: u64) -> String {
        format!("{}/users/{seller_id}", self.api_base)
    }

    /// URL to fetch for a request. Search requests carry their own URL.
    #[must_use]
    pub fn url_for(&self, request: &CatalogRequest) -> String {
        match request {
            CatalogRequest::Categories { .. } => self.categories(),
            CatalogRequest::Search { url, .. } => url.clone(),
            CatalogRequest::Item { item_id, .. } => self.item(item_id),
            CatalogRequest::Seller { seller_id, .. } => self.seller(*seller_id),
        }
    }
}

impl Default for CatalogEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_SITE_ID, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls_point_at_brazilian_site() {
        let endpoints = CatalogEndpoints::default();
        assert_eq!(endpoints.categories(), "https://api.mercadolibre.com/sites/MLB/categories");
        assert_eq!(endpoints.search(), "https://api.mercadolibre.com/sites/MLB/search");
        assert_eq!(endpoints.item("MLB123"), "https://api.mercadolibre.com/items/MLB123");
        assert_eq!(endpoints.seller(42), "https://api.mercadolibre.com/users/42");
    }

    #[test]
    fn explicit_search_endpoint_wins() {
        let endpoints = CatalogEndpoints::new("http://localhost:8080/", "MLA", Some("http://proxy/search?"));
        assert_eq!(endpoints.search(), "http://proxy/search");
        assert_eq!(endpoints.categories(), "http://localhost:8080/sites/MLA/categories");
    }
}
