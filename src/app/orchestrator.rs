//! Search and detail state machines.
//!
//! Two independent machines live on [`AppState`]:
//!
//! - the **search** machine, `Idle → Loading → Success | Error`, re-entrant
//!   from any state. There is no cancellation; whichever search response
//!   arrives last is the one shown.
//! - the **detail** machine, `Idle → Loading → Open | Error`. The item and
//!   seller fetches run concurrently and are joined on a ticket. Both must
//!   succeed for the modal to open. Responses carrying an old ticket are
//!   dropped.
//!
//! Errors stay inside the machine that produced them: a failed detail fetch
//! never touches the product list or the search status.

use super::{Action, AppState, Focus};
use crate::catalog::{build_search_url, CatalogPayload, CatalogRequest, SearchCriteria};
use crate::domain::{ProductDetails, Result, SearchResponse, SellerDetails};

pub const NO_RESULTS_MESSAGE: &str = "Nenhum produto encontrado. Tente um termo de busca diferente.";
pub const SEARCH_FAILED_MESSAGE: &str = "Falha ao buscar produtos. Por favor, tente novamente mais tarde.";
pub const CATEGORIES_FAILED_MESSAGE: &str = "Falha ao carregar categorias. Por favor, tente novamente mais tarde.";
pub const DETAIL_FAILED_MESSAGE: &str =
    "Falha ao carregar detalhes do produto. Por favor, tente novamente mais tarde.";

/// Why the last search produced no cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    /// Well-formed response with an empty result list.
    NoResults,
    /// Transport, status or decoding failure.
    FetchFailed,
}

impl SearchFailure {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoResults => NO_RESULTS_MESSAGE,
            Self::FetchFailed => SEARCH_FAILED_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(SearchFailure),
}

/// Half-joined detail fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingDetail {
    pub ticket: u64,
    pub item: Option<ProductDetails>,
    pub seller: Option<SellerDetails>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailStatus {
    #[default]
    Idle,
    Loading(PendingDetail),
    Open {
        item: Box<ProductDetails>,
        seller: SellerDetails,
    },
    Error,
}

impl DetailStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    #[must_use]
    pub const fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Error => Some(DETAIL_FAILED_MESSAGE),
            _ => None,
        }
    }
}

impl AppState {
    /// Criteria for the next search, borrowed from the current form and filters.
    #[must_use]
    pub fn search_criteria(&self) -> SearchCriteria<'_> {
        SearchCriteria {
            term: &self.search_term,
            category: self.category.as_deref(),
            sort: self.sort,
            filters: &self.filters,
        }
    }

    /// Starts a search with the current criteria.
    ///
    /// Returns `None` without touching any state when the term is blank.
    /// Otherwise the previous results, available filters and any detail error
    /// are cleared and the fetch to issue is returned.
    pub fn begin_search(&mut self) -> Option<Action> {
        let Some(url) = build_search_url(self.endpoints.search(), &self.search_criteria()) else {
            tracing::debug!("blank search term, not searching");
            return None;
        };

        tracing::debug!(url = %url, "starting search");

        self.search_status = SearchStatus::Loading;
        self.products.clear();
        self.available_filters.clear();
        self.selected_index = 0;
        self.sidebar_cursor = 0;
        if self.detail == DetailStatus::Error {
            self.detail = DetailStatus::Idle;
        }

        Some(Action::fetch(&self.endpoints, CatalogRequest::search(url)))
    }

    fn finish_search(&mut self, outcome: Result<SearchResponse>) {
        match outcome {
            Ok(response) if response.results.is_empty() => {
                tracing::debug!("search returned no results");
                self.products.clear();
                self.search_status = SearchStatus::Error(SearchFailure::NoResults);
            }
            Ok(response) => {
                tracing::debug!(
                    result_count = response.results.len(),
                    facet_count = response.available_filters.as_ref().map_or(0, Vec::len),
                    "search succeeded"
                );
                self.filters.seed_expansion(response.facet_ids());
                self.products = response.results;
                self.available_filters = response.available_filters.unwrap_or_default();
                self.selected_index = 0;
                self.sidebar_cursor = 0;
                self.search_status = SearchStatus::Success;
            }
            Err(e) => {
                tracing::debug!(error = %e, "search failed");
                self.products.clear();
                self.search_status = SearchStatus::Error(SearchFailure::FetchFailed);
            }
        }
    }

    /// Starts loading details for the selected card.
    ///
    /// Returns the item and seller fetches to issue together, or nothing when
    /// no card is selected.
    pub fn begin_detail(&mut self) -> Vec<Action> {
        let Some(product) = self.selected_product() else {
            return vec![];
        };
        let item_id = product.id.clone();
        let seller_id = product.seller_id();

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        tracing::debug!(item_id = %item_id, seller_id, ticket, "loading product details");

        self.detail = DetailStatus::Loading(PendingDetail {
            ticket,
            ..PendingDetail::default()
        });

        vec![
            Action::fetch(&self.endpoints, CatalogRequest::item(item_id, ticket)),
            Action::fetch(&self.endpoints, CatalogRequest::seller(seller_id, ticket)),
        ]
    }

    /// Discards the open (or failed) detail view.
    pub fn close_detail(&mut self) {
        self.detail = DetailStatus::Idle;
        if self.focus == Focus::Detail {
            self.focus = Focus::Results;
        }
    }

    /// Returns the pending join for `ticket`, if that selection is still current.
    fn pending_detail(&mut self, ticket: u64) -> Option<&mut PendingDetail> {
        match &mut self.detail {
            DetailStatus::Loading(pending) if pending.ticket == ticket => Some(pending),
            _ => {
                tracing::debug!(ticket, "ignoring stale detail response");
                None
            }
        }
    }

    fn fail_detail(&mut self, ticket: u64) -> bool {
        if self.pending_detail(ticket).is_none() {
            return false;
        }
        self.detail = DetailStatus::Error;
        true
    }

    fn join_detail(&mut self, ticket: u64, item: Option<ProductDetails>, seller: Option<SellerDetails>) -> bool {
        let Some(pending) = self.pending_detail(ticket) else {
            return false;
        };
        if item.is_some() {
            pending.item = item;
        }
        if seller.is_some() {
            pending.seller = seller;
        }

        if pending.item.is_some() && pending.seller.is_some() {
            let PendingDetail {
                item: Some(item),
                seller: Some(seller),
                ..
            } = std::mem::take(pending)
            else {
                return false;
            };
            tracing::debug!(item_id = %item.id, seller_id = seller.id, "detail ready");
            self.detail = DetailStatus::Open {
                item: Box::new(item),
                seller,
            };
            self.focus = Focus::Detail;
            return true;
        }

        false
    }

    /// Applies a decoded (or failed) catalog response.
    ///
    /// Returns whether anything visible changed.
    pub fn apply_response(&mut self, request: &CatalogRequest, outcome: Result<CatalogPayload>) -> bool {
        match (request, outcome) {
            (CatalogRequest::Categories { .. }, Ok(CatalogPayload::Categories(categories))) => {
                tracing::debug!(category_count = categories.len(), "categories loaded");
                self.categories = categories;
                self.categories_failed = false;
                true
            }
            (CatalogRequest::Categories { .. }, Err(e)) => {
                tracing::debug!(error = %e, "failed to load categories");
                self.categories_failed = true;
                true
            }
            (CatalogRequest::Search { .. }, Ok(CatalogPayload::Search(response))) => {
                self.finish_search(Ok(response));
                true
            }
            (CatalogRequest::Search { .. }, Err(e)) => {
                self.finish_search(Err(e));
                true
            }
            (CatalogRequest::Item { ticket, .. }, Ok(CatalogPayload::Item(item))) => {
                self.join_detail(*ticket, Some(item), None)
            }
            (CatalogRequest::Seller { ticket, .. }, Ok(CatalogPayload::Seller(seller))) => {
                self.join_detail(*ticket, None, Some(seller))
            }
            (CatalogRequest::Item { ticket, .. } | CatalogRequest::Seller { ticket, .. }, Err(e)) => {
                tracing::debug!(error = %e, ticket, kind = request.kind(), "detail fetch failed");
                self.fail_detail(*ticket)
            }
            (request, Ok(_)) => {
                tracing::debug!(kind = request.kind(), "payload does not match request, ignoring");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEndpoints;
    use crate::domain::product::{SellerRef, Shipping};
    use crate::domain::Product;
    use crate::ui::Theme;

    fn product(id: &str, seller: u64) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Produto {id}"),
            price: 10.0,
            currency_id: "BRL".to_string(),
            thumbnail: String::new(),
            shipping: Shipping::default(),
            seller: SellerRef { id: seller },
        }
    }

    fn details(id: &str) -> ProductDetails {
        ProductDetails {
            id: id.to_string(),
            title: "Produto".to_string(),
            price: 10.0,
            currency_id: "BRL".to_string(),
            condition: "new".to_string(),
            sold_quantity: 0,
            shipping: None,
            pictures: None,
            thumbnail: String::new(),
            permalink: "https://produto.mercadolivre.com.br/x".to_string(),
            attributes: None,
        }
    }

    fn seller(id: u64) -> SellerDetails {
        SellerDetails {
            id,
            nickname: "LOJA".to_string(),
            seller_reputation: None,
        }
    }

    fn state_with_results() -> AppState {
        let mut state = AppState::new(Theme::default(), CatalogEndpoints::default());
        state.products = vec![product("MLB1", 7), product("MLB2", 8)];
        state.search_status = SearchStatus::Success;
        state
    }

    #[test]
    fn blank_term_leaves_state_untouched() {
        let mut state = state_with_results();
        state.search_term = "  ".to_string();

        assert!(state.begin_search().is_none());
        assert_eq!(state.search_status, SearchStatus::Success);
        assert_eq!(state.products.len(), 2);
    }

    #[test]
    fn begin_search_clears_previous_results_and_detail_error() {
        let mut state = state_with_results();
        state.search_term = "notebook".to_string();
        state.detail = DetailStatus::Error;

        let action = state.begin_search().unwrap();

        assert!(matches!(action, Action::Fetch { ref url, .. } if url.ends_with("?q=notebook")));
        assert_eq!(state.search_status, SearchStatus::Loading);
        assert!(state.products.is_empty());
        assert_eq!(state.detail, DetailStatus::Idle);
    }

    #[test]
    fn detail_opens_only_after_both_halves() {
        let mut state = state_with_results();
        let actions = state.begin_detail();
        assert_eq!(actions.len(), 2);

        let item_request = CatalogRequest::item("MLB1".to_string(), 1);
        let seller_request = CatalogRequest::seller(7, 1);

        assert!(!state.apply_response(&seller_request, Ok(CatalogPayload::Seller(seller(7)))));
        assert!(state.detail.is_loading());

        assert!(state.apply_response(&item_request, Ok(CatalogPayload::Item(details("MLB1")))));
        assert!(matches!(state.detail, DetailStatus::Open { .. }));
        assert_eq!(state.focus, Focus::Detail);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut state = state_with_results();
        state.begin_detail();
        state.move_selection_down();
        state.begin_detail();

        let stale = CatalogRequest::item("MLB1".to_string(), 1);
        assert!(!state.apply_response(&stale, Err(crate::domain::BuscaError::Http { status: 500 })));
        assert!(matches!(state.detail, DetailStatus::Loading(ref p) if p.ticket == 2));
    }

    #[test]
    fn detail_failure_keeps_products() {
        let mut state = state_with_results();
        state.begin_detail();

        let request = CatalogRequest::seller(7, 1);
        assert!(state.apply_response(&request, Err(crate::domain::BuscaError::Http { status: 404 })));

        assert_eq!(state.detail, DetailStatus::Error);
        assert_eq!(state.products.len(), 2);
        assert_eq!(state.search_status, SearchStatus::Success);
        assert_eq!(state.focus, Focus::Results);
    }
}
