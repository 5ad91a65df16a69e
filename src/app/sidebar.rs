//! Filter sidebar rows.
//!
//! The sidebar is a flat list of rows derived from the filter store and the
//! facets of the last search. The cursor indexes into that list; toggling a
//! row applies the matching filter store operation.

use crate::domain::{AvailableFilter, Condition, FilterState, PriceBound};

/// Facet values shown per group.
pub const MAX_FACET_VALUES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRow {
    Price(PriceBound),
    Condition(Condition),
    FreeShipping,
    FacetHeader {
        facet_id: String,
    },
    FacetValue {
        facet_id: String,
        value_id: String,
    },
}

impl FilterRow {
    /// Price rows accept typed digits.
    #[must_use]
    pub const fn price_bound(&self) -> Option<PriceBound> {
        match self {
            Self::Price(bound) => Some(*bound),
            _ => None,
        }
    }

    /// Applies the row's toggle to the filter store. Price rows do nothing.
    pub fn toggle(&self, filters: &mut FilterState) {
        match self {
            Self::Price(_) => {}
            Self::Condition(condition) => filters.set_condition(*condition),
            Self::FreeShipping => filters.set_free_shipping(!filters.free_shipping),
            Self::FacetHeader { facet_id } => filters.toggle_facet_expansion(facet_id),
            Self::FacetValue { facet_id, value_id } => {
                let checked = filters.is_selected(facet_id, value_id);
                filters.set_facet_value(facet_id, value_id, !checked);
            }
        }
    }
}

/// Every row in display order.
#[must_use]
pub fn sidebar_rows(filters: &FilterState, available: &[AvailableFilter]) -> Vec<FilterRow> {
    let mut rows = vec![FilterRow::Price(PriceBound::Min), FilterRow::Price(PriceBound::Max)];
    rows.extend(Condition::ALL.into_iter().map(FilterRow::Condition));
    rows.push(FilterRow::FreeShipping);

    for facet in available {
        rows.push(FilterRow::FacetHeader {
            facet_id: facet.id.clone(),
        });
        if filters.is_expanded(&facet.id) {
            rows.extend(facet.values.iter().take(MAX_FACET_VALUES).map(|value| FilterRow::FacetValue {
                facet_id: facet.id.clone(),
                value_id: value.id.clone(),
            }));
        }
    }

    rows
}

/// Whether `c` may be typed into a price row.
#[must_use]
pub const fn is_price_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ','
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FilterValue;

    fn brand_facet(value_count: usize) -> AvailableFilter {
        AvailableFilter {
            id: "BRAND".to_string(),
            name: "Marca".to_string(),
            values: (0..value_count)
                .map(|i| FilterValue {
                    id: i.to_string(),
                    name: format!("Marca {i}"),
                    results: 10,
                })
                .collect(),
        }
    }

    #[test]
    fn fixed_rows_come_first() {
        let rows = sidebar_rows(&FilterState::default(), &[]);
        assert_eq!(
            rows,
            vec![
                FilterRow::Price(PriceBound::Min),
                FilterRow::Price(PriceBound::Max),
                FilterRow::Condition(Condition::All),
                FilterRow::Condition(Condition::New),
                FilterRow::Condition(Condition::Used),
                FilterRow::FreeShipping,
            ]
        );
    }

    #[test]
    fn expanded_facet_shows_at_most_five_values() {
        let rows = sidebar_rows(&FilterState::default(), &[brand_facet(8)]);
        let values = rows.iter().filter(|r| matches!(r, FilterRow::FacetValue { .. })).count();
        assert_eq!(values, MAX_FACET_VALUES);
    }

    #[test]
    fn collapsed_facet_shows_only_header() {
        let mut filters = FilterState::default();
        let header = FilterRow::FacetHeader {
            facet_id: "BRAND".to_string(),
        };
        header.toggle(&mut filters);

        let rows = sidebar_rows(&filters, &[brand_facet(3)]);
        assert_eq!(rows.last(), Some(&header));
    }

    #[test]
    fn value_row_toggles_selection() {
        let mut filters = FilterState::default();
        let row = FilterRow::FacetValue {
            facet_id: "BRAND".to_string(),
            value_id: "2".to_string(),
        };

        row.toggle(&mut filters);
        assert!(filters.is_selected("BRAND", "2"));
        row.toggle(&mut filters);
        assert!(!filters.is_selected("BRAND", "2"));
    }

    #[test]
    fn price_chars() {
        assert!(is_price_char('7'));
        assert!(is_price_char(','));
        assert!(!is_price_char('a'));
        assert!(!is_price_char('-'));
    }
}
