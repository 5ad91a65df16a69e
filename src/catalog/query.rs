//! Search URL builder.

use std::fmt::Write;

use crate::domain::{FilterState, SortMode};

/// Everything a search request is built from.
#[derive(Debug, Clone, Copy)]
pub struct SearchCriteria<'a> {
    /// Raw term as typed. Only its trimmed form decides whether to search.
    pub term: &'a str,
    pub category: Option<&'a str>,
    pub sort: SortMode,
    pub filters: &'a FilterState,
}

/// Builds the full search URL, or `None` when the term is blank.
///
/// `q` always comes first and is the only percent-encoded value. The rest are
/// appended verbatim in a fixed order: `category`, `sort`, `price_min`,
/// `price_max`, `shipping`, `ITEM_CONDITION`, then one `facet=value` pair per
/// selected facet value. Parameters at their default are left out.
///
/// # Examples
///
/// ```
/// use mercado_busca::catalog::{build_search_url, SearchCriteria};
/// use mercado_busca::domain::{FilterState, SortMode};
///
/// let filters = FilterState::default();
/// let criteria = SearchCriteria {
///     term: "notebook gamer",
///     category: None,
///     sort: SortMode::Relevance,
///     filters: &filters,
/// };
///
/// assert_eq!(
///     build_search_url("https://api.example/search", &criteria).as_deref(),
///     Some("https://api.example/search?q=notebook%20gamer")
/// );
/// ```
#[must_use]
pub fn build_search_url(endpoint: &str, criteria: &SearchCriteria<'_>) -> Option<String> {
    if criteria.term.trim().is_empty() {
        return None;
    }

    let filters = criteria.filters;
    let mut url = format!("{endpoint}?q={}", urlencoding::encode(criteria.term));

    // Writing into a String cannot fail.
    let mut push = |key: &str, value: &str| {
        let _ = write!(url, "&{key}={value}");
    };

    if let Some(category) = criteria.category.filter(|c| !c.is_empty()) {
        push("category", category);
    }
    if let Some(sort) = criteria.sort.as_param() {
        push("sort", sort);
    }
    if !filters.price_min.is_empty() {
        push("price_min", &filters.price_min);
    }
    if !filters.price_max.is_empty() {
        push("price_max", &filters.price_max);
    }
    if filters.free_shipping {
        push("shipping", "free");
    }
    if let Some(condition) = filters.condition.as_param() {
        push("ITEM_CONDITION", condition);
    }
    for (facet, value) in filters.selections() {
        push(facet, value);
    }

    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Condition, PriceBound};

    const ENDPOINT: &str = "https://api.mercadolibre.com/sites/MLB/search";

    fn url_for(term: &str, category: Option<&str>, sort: SortMode, filters: &FilterState) -> Option<String> {
        build_search_url(
            ENDPOINT,
            &SearchCriteria {
                term,
                category,
                sort,
                filters,
            },
        )
    }

    fn query_of(url: &str) -> &str {
        url.split_once('?').map(|(_, q)| q).unwrap_or_default()
    }

    #[test]
    fn plain_term_has_only_q() {
        let url = url_for("notebook", None, SortMode::Relevance, &FilterState::default()).unwrap();
        assert_eq!(url, format!("{ENDPOINT}?q=notebook"));
    }

    #[test]
    fn blank_term_builds_nothing() {
        let filters = FilterState::default();
        assert_eq!(url_for("", None, SortMode::Relevance, &filters), None);
        assert_eq!(url_for("   \t", Some("MLB1648"), SortMode::PriceAsc, &filters), None);
    }

    #[test]
    fn q_is_first_and_encoded() {
        let mut filters = FilterState::default();
        filters.set_free_shipping(true);
        let url = url_for("café & pão", Some("MLB5672"), SortMode::PriceDesc, &filters).unwrap();

        assert!(query_of(&url).starts_with("q=caf%C3%A9%20%26%20p%C3%A3o&"));
    }

    #[test]
    fn defaults_emit_only_category_and_sort() {
        let url = url_for("tv", Some("MLB1000"), SortMode::PriceAsc, &FilterState::default()).unwrap();
        assert_eq!(query_of(&url), "q=tv&category=MLB1000&sort=price_asc");
    }

    #[test]
    fn only_min_price_is_emitted_when_max_is_empty() {
        let mut filters = FilterState::default();
        filters.set_price_bound(PriceBound::Min, "100");
        let url = url_for("notebook", None, SortMode::Relevance, &filters).unwrap();

        assert!(url.contains("price_min=100"));
        assert!(!url.contains("price_max"));
    }

    #[test]
    fn full_parameter_order() {
        let mut filters = FilterState::default();
        filters.set_price_bound(PriceBound::Min, "100");
        filters.set_price_bound(PriceBound::Max, "2500");
        filters.set_free_shipping(true);
        filters.set_condition(Condition::New);
        filters.set_facet_value("BRAND", "206", true);
        filters.set_facet_value("COLOR", "52049", true);
        filters.set_facet_value("BRAND", "9344", true);

        let url = url_for("notebook", Some("MLB1648"), SortMode::PriceDesc, &filters).unwrap();

        assert_eq!(
            query_of(&url),
            "q=notebook&category=MLB1648&sort=price_desc&price_min=100&price_max=2500\
             &shipping=free&ITEM_CONDITION=new&BRAND=206&BRAND=9344&COLOR=52049"
        );
    }

    #[test]
    fn unticked_facet_emits_nothing() {
        let mut filters = FilterState::default();
        filters.set_facet_value("BRAND", "206", true);
        filters.set_facet_value("BRAND", "206", false);

        let url = url_for("notebook", None, SortMode::Relevance, &filters).unwrap();
        assert_eq!(query_of(&url), "q=notebook");
    }
}
