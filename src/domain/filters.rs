//! Filter state store.
//!
//! [`FilterState`] holds everything the sidebar edits: the price range, the
//! condition radio, the free-shipping checkbox, the facet values the user has
//! ticked and which facet groups are expanded. It is mutated only through the
//! named operations below and read by the query builder when a search is
//! issued.
//!
//! Facet selections keep insertion order (facets in the order they were first
//! touched, values in the order they were ticked) because the query builder
//! emits them in that order.

use std::collections::BTreeMap;

/// Which end of the price range to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBound {
    Min,
    Max,
}

/// Sidebar filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Lower price bound, free-form. Empty means unset.
    pub price_min: String,
    /// Upper price bound, free-form. Empty means unset.
    pub price_max: String,
    pub condition: super::Condition,
    pub free_shipping: bool,
    selected: Vec<(String, Vec<String>)>,
    expanded: BTreeMap<String, bool>,
}

impl FilterState {
    /// Overwrites one price bound. No validation; an empty string unsets it.
    pub fn set_price_bound(&mut self, bound: PriceBound, value: impl Into<String>) {
        let value = value.into();
        match bound {
            PriceBound::Min => self.price_min = value,
            PriceBound::Max => self.price_max = value,
        }
    }

    #[must_use]
    pub fn price_bound(&self, bound: PriceBound) -> &str {
        match bound {
            PriceBound::Min => &self.price_min,
            PriceBound::Max => &self.price_max,
        }
    }

    pub fn set_condition(&mut self, condition: super::Condition) {
        self.condition = condition;
    }

    pub fn set_free_shipping(&mut self, free_shipping: bool) {
        self.free_shipping = free_shipping;
    }

    /// Whether a facet group is expanded. Unseen ids count as expanded.
    #[must_use]
    pub fn is_expanded(&self, facet_id: &str) -> bool {
        self.expanded.get(facet_id).copied().unwrap_or(true)
    }

    pub fn toggle_facet_expansion(&mut self, facet_id: &str) {
        let expanded = self.is_expanded(facet_id);
        self.expanded.insert(facet_id.to_string(), !expanded);
    }

    /// Replaces the whole expand map with every given id expanded.
    pub fn seed_expansion<I, S>(&mut self, facet_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded = facet_ids.into_iter().map(|id| (id.into(), true)).collect();
    }

    /// Ticks or unticks one facet value.
    ///
    /// Ticking an already selected value is a no-op. Unticking leaves the
    /// facet entry in place with whatever values remain, possibly none.
    pub fn set_facet_value(&mut self, facet_id: &str, value_id: &str, checked: bool) {
        let index = match self.selected.iter().position(|(id, _)| id == facet_id) {
            Some(index) => index,
            None if checked => {
                self.selected.push((facet_id.to_string(), Vec::new()));
                self.selected.len() - 1
            }
            None => return,
        };

        let values = &mut self.selected[index].1;
        if checked {
            if !values.iter().any(|v| v == value_id) {
                values.push(value_id.to_string());
            }
        } else {
            values.retain(|v| v != value_id);
        }
    }

    #[must_use]
    pub fn is_selected(&self, facet_id: &str, value_id: &str) -> bool {
        self.selected_values(facet_id).iter().any(|v| v == value_id)
    }

    #[must_use]
    pub fn selected_values(&self, facet_id: &str) -> &[String] {
        self.selected
            .iter()
            .find(|(id, _)| id == facet_id)
            .map_or(&[], |(_, values)| values.as_slice())
    }

    /// Every `(facet id, value id)` pair, in emission order.
    pub fn selections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selected
            .iter()
            .flat_map(|(facet, values)| values.iter().map(move |v| (facet.as_str(), v.as_str())))
    }

    /// Clears price bounds, condition, free shipping and all facet selections.
    ///
    /// Expand/collapse state is not touched.
    pub fn reset(&mut self) {
        self.price_min.clear();
        self.price_max.clear();
        self.condition = super::Condition::All;
        self.free_shipping = false;
        self.selected.clear();
    }

    /// True when nothing would be emitted beyond the search term, category and sort.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.price_min.is_empty()
            && self.price_max.is_empty()
            && self.condition == super::Condition::All
            && !self.free_shipping
            && self.selections().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Condition;

    #[test]
    fn untick_after_tick_restores_selection() {
        let mut filters = FilterState::default();
        filters.set_facet_value("BRAND", "1", true);
        let before = filters.selected_values("BRAND").to_vec();

        filters.set_facet_value("BRAND", "2", true);
        filters.set_facet_value("BRAND", "2", false);

        assert_eq!(filters.selected_values("BRAND"), before.as_slice());
    }

    #[test]
    fn ticking_twice_does_not_duplicate() {
        let mut filters = FilterState::default();
        filters.set_facet_value("COLOR", "red", true);
        filters.set_facet_value("COLOR", "red", true);
        assert_eq!(filters.selected_values("COLOR").len(), 1);
    }

    #[test]
    fn unrelated_facets_are_untouched() {
        let mut filters = FilterState::default();
        filters.set_facet_value("BRAND", "1", true);
        filters.set_facet_value("COLOR", "red", true);
        filters.set_facet_value("COLOR", "red", false);

        assert_eq!(filters.selected_values("BRAND"), ["1".to_string()]);
        assert!(filters.selected_values("COLOR").is_empty());
        assert_eq!(filters.selections().collect::<Vec<_>>(), vec![("BRAND", "1")]);
    }

    #[test]
    fn unticking_unknown_facet_is_a_no_op() {
        let mut filters = FilterState::default();
        filters.set_facet_value("BRAND", "1", false);
        assert!(filters.is_default());
    }

    #[test]
    fn selections_keep_facet_and_value_order() {
        let mut filters = FilterState::default();
        filters.set_facet_value("COLOR", "blue", true);
        filters.set_facet_value("BRAND", "9", true);
        filters.set_facet_value("COLOR", "red", true);

        let pairs: Vec<_> = filters.selections().collect();
        assert_eq!(pairs, vec![("COLOR", "blue"), ("COLOR", "red"), ("BRAND", "9")]);
    }

    #[test]
    fn expansion_defaults_to_open_and_toggles() {
        let mut filters = FilterState::default();
        assert!(filters.is_expanded("BRAND"));

        filters.toggle_facet_expansion("BRAND");
        assert!(!filters.is_expanded("BRAND"));

        filters.toggle_facet_expansion("BRAND");
        assert!(filters.is_expanded("BRAND"));
    }

    #[test]
    fn seeding_overwrites_collapsed_groups() {
        let mut filters = FilterState::default();
        filters.toggle_facet_expansion("BRAND");
        filters.seed_expansion(["BRAND", "COLOR"]);

        assert!(filters.is_expanded("BRAND"));
        assert!(filters.is_expanded("COLOR"));
    }

    #[test]
    fn reset_clears_everything_but_expansion() {
        let mut filters = FilterState::default();
        filters.set_price_bound(PriceBound::Min, "100");
        filters.set_price_bound(PriceBound::Max, "900");
        filters.set_condition(Condition::Used);
        filters.set_free_shipping(true);
        filters.set_facet_value("BRAND", "1", true);
        filters.toggle_facet_expansion("BRAND");

        filters.reset();

        assert!(filters.is_default());
        assert_eq!(filters.price_bound(PriceBound::Min), "");
        assert!(!filters.is_expanded("BRAND"));
    }
}
