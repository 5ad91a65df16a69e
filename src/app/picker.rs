//! Category picker with fuzzy filtering.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::domain::Category;

pub const ALL_CATEGORIES_LABEL: &str = "Todas as Categorias";

/// One visible picker row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    /// `None` for the "all categories" row.
    pub id: Option<String>,
    pub name: String,
    /// Matched character ranges as `(start, end)` char indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Picker input state. Reset every time the picker opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPicker {
    pub query: String,
    pub selected_index: usize,
}

impl CategoryPicker {
    /// Visible rows: "all categories" first, then every category whose name
    /// fuzzy-matches all query tokens, in catalog order.
    #[must_use]
    pub fn entries(&self, categories: &[Category]) -> Vec<PickerEntry> {
        let tokens: Vec<&str> = self.query.split_whitespace().collect();
        let matcher = SkimMatcherV2::default();

        let all = PickerEntry {
            id: None,
            name: ALL_CATEGORIES_LABEL.to_string(),
            highlight_ranges: vec![],
        };

        std::iter::once(all)
            .chain(categories.iter().filter_map(|category| {
                let mut indices = Vec::new();
                for token in &tokens {
                    let (_score, found) = matcher.fuzzy_indices(&category.name, token)?;
                    indices.extend(found);
                }
                indices.sort_unstable();
                indices.dedup();

                Some(PickerEntry {
                    id: Some(category.id.clone()),
                    name: category.name.clone(),
                    highlight_ranges: coalesce(&indices),
                })
            }))
            .collect()
    }

    pub fn move_down(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    pub fn move_up(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = self.selected_index.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
        self.selected_index = 0;
    }

    pub fn pop(&mut self) {
        self.query.pop();
        self.selected_index = 0;
    }
}

/// Folds sorted indices into contiguous `(start, end)` ranges.
fn coalesce(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        [
            ("MLB5672", "Acessórios para Veículos"),
            ("MLB1648", "Informática"),
            ("MLB1000", "Eletrônicos, Áudio e Vídeo"),
        ]
        .into_iter()
        .map(|(id, name)| Category {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
    }

    #[test]
    fn empty_query_lists_everything_after_all_categories() {
        let entries = CategoryPicker::default().entries(&categories());
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].id, None);
        assert_eq!(entries[0].name, ALL_CATEGORIES_LABEL);
        assert!(entries.iter().all(|e| e.highlight_ranges.is_empty()));
    }

    #[test]
    fn query_filters_and_highlights() {
        let picker = CategoryPicker {
            query: "info".to_string(),
            selected_index: 0,
        };
        let entries = picker.entries(&categories());

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].id.as_deref(), Some("MLB1648"));
        assert_eq!(entries[1].highlight_ranges, vec![(0, 4)]);
    }

    #[test]
    fn selection_wraps() {
        let mut picker = CategoryPicker::default();
        picker.move_up(3);
        assert_eq!(picker.selected_index, 2);
        picker.move_down(3);
        assert_eq!(picker.selected_index, 0);
    }

    #[test]
    fn coalesces_runs() {
        assert_eq!(coalesce(&[0, 1, 2, 5, 7, 8]), vec![(0, 3), (5, 6), (7, 9)]);
        assert!(coalesce(&[]).is_empty());
    }
}
