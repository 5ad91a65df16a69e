//! Decoding of catalog responses.

use serde::de::DeserializeOwned;

use super::CatalogRequest;
use crate::domain::{BuscaError, Category, ProductDetails, Result, SearchResponse, SellerDetails};

/// A successfully decoded response, typed by the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogPayload {
    Categories(Vec<Category>),
    Search(SearchResponse),
    Item(ProductDetails),
    Seller(SellerDetails),
}

/// Checks the status and decodes the body into the payload `request` expects.
///
/// # Errors
///
/// Returns [`BuscaError::Http`] for any status outside `2xx`, regardless of the
/// body, and [`BuscaError::Decode`] when the body does not match the
/// expected shape.
pub fn decode(request: &CatalogRequest, status: u16, body: &[u8]) -> Result<CatalogPayload> {
    if !(200..300).contains(&status) {
        return Err(BuscaError::Http { status });
    }

    Ok(match request {
        CatalogRequest::Categories { .. } => CatalogPayload::Categories(parse(body)?),
        CatalogRequest::Search { .. } => CatalogPayload::Search(parse(body)?),
        CatalogRequest::Item { .. } => CatalogPayload::Item(parse(body)?),
        CatalogRequest::Seller { .. } => CatalogPayload::Seller(parse(body)?),
    })
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_request() -> CatalogRequest {
        CatalogRequest::Search {
            url: "https://api.mercadolibre.com/sites/MLB/search?q=tv".to_string(),
            trace_context: None,
        }
    }

    #[test]
    fn decodes_search_results() {
        let body = br#"{
            "results": [{
                "id": "MLB1",
                "title": "Smart TV 50",
                "price": 2199.9,
                "currency_id": "BRL",
                "thumbnail": "http://http2.mlstatic.com/D_1.jpg",
                "shipping": {"free_shipping": true},
                "seller": {"id": 12}
            }],
            "available_filters": [{
                "id": "BRAND",
                "name": "Marca",
                "values": [{"id": "206", "name": "Samsung", "results": 40}]
            }]
        }"#;

        let CatalogPayload::Search(response) = decode(&search_request(), 200, body).unwrap() else {
            panic!("expected a search payload");
        };
        assert_eq!(response.results.len(), 1);
        assert!(response.results[0].free_shipping());
        assert_eq!(response.facet_ids(), vec!["BRAND".to_string()]);
    }

    #[test]
    fn missing_results_decode_as_empty() {
        let payload = decode(&search_request(), 200, b"{}").unwrap();
        assert!(matches!(payload, CatalogPayload::Search(r) if r.results.is_empty()));
    }

    #[test]
    fn non_success_status_fails_even_with_json_body() {
        let err = decode(&CatalogRequest::categories(), 429, b"[]").unwrap_err();
        assert!(matches!(err, BuscaError::Http { status: 429 }));
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let err = decode(&CatalogRequest::seller(1, 1), 200, b"<html>").unwrap_err();
        assert!(matches!(err, BuscaError::Decode(_)));
    }

    #[test]
    fn decodes_categories_in_order() {
        let body = r#"[{"id":"MLB5672","name":"Acessórios para Veículos"},{"id":"MLB1000","name":"Eletrônicos"}]"#.as_bytes();
        let CatalogPayload::Categories(categories) = decode(&CatalogRequest::categories(), 200, body).unwrap() else {
            panic!("expected categories");
        };
        let ids: Vec<_> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["MLB5672", "MLB1000"]);
    }
}
