//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the search
//! form, the filter store, the last search results, the category list, the
//! detail machine and the focus. The search and detail transitions live in
//! [`orchestrator`](super::orchestrator); this module holds the plain
//! navigation helpers and turns a state snapshot into a
//! [`UIViewModel`](crate::ui::viewmodel::UIViewModel).

use super::modes::Focus;
use super::orchestrator::{DetailStatus, SearchStatus, CATEGORIES_FAILED_MESSAGE};
use super::picker::{CategoryPicker, ALL_CATEGORIES_LABEL};
use super::sidebar::{sidebar_rows, FilterRow};
use crate::catalog::CatalogEndpoints;
use crate::domain::{AvailableFilter, Category, Condition, FilterState, PriceBound, Product, SortMode};
use crate::ui::format::{format_price, secure_image_url, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Banner, BannerKind, Body, DetailView, EmptyState, FooterInfo, HeaderInfo, PickerInfo, PickerItem, ProductCard,
    ResultList, SearchBarInfo, SidebarInfo, SidebarLine, UIViewModel, SIDEBAR_WIDTH,
};

pub const APP_TITLE: &str = "Mercado Busca";
pub const LOADING_MESSAGE: &str = "Carregando produtos...";
pub const DETAIL_LOADING_MESSAGE: &str = "Carregando detalhes...";

/// Rows per result card.
const CARD_HEIGHT: usize = 2;

/// Blank line, header, border, search box (3), border, footer.
const CHROME_ROWS: usize = 8;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// URLs for the catalog API, resolved from configuration.
    pub endpoints: CatalogEndpoints,

    pub focus: Focus,

    /// Search term as typed.
    pub search_term: String,

    /// Selected category id, `None` for all categories.
    pub category: Option<String>,

    pub sort: SortMode,

    /// Sidebar filters applied on the next search.
    pub filters: FilterState,

    /// Categories for the picker, fetched once at startup.
    pub categories: Vec<Category>,

    /// Whether the category fetch failed.
    pub categories_failed: bool,

    /// Cards from the last successful search.
    pub products: Vec<Product>,

    /// Facets from the last successful search.
    pub available_filters: Vec<AvailableFilter>,

    pub search_status: SearchStatus,

    /// Index of the selected card within `products`.
    pub selected_index: usize,

    pub detail: DetailStatus,

    /// Last issued detail ticket.
    pub next_ticket: u64,

    pub sidebar_open: bool,

    /// Index into the sidebar rows.
    pub sidebar_cursor: usize,

    pub picker: CategoryPicker,
}

impl AppState {
    #[must_use]
    pub fn new(theme: Theme, endpoints: CatalogEndpoints) -> Self {
        Self {
            theme,
            endpoints,
            focus: Focus::Results,
            search_term: String::new(),
            category: None,
            sort: SortMode::Relevance,
            filters: FilterState::default(),
            categories: vec![],
            categories_failed: false,
            products: vec![],
            available_filters: vec![],
            search_status: SearchStatus::Idle,
            selected_index: 0,
            detail: DetailStatus::Idle,
            next_ticket: 0,
            sidebar_open: false,
            sidebar_cursor: 0,
            picker: CategoryPicker::default(),
        }
    }

    /// Moves the card selection down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.products.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.products.len();
    }

    /// Moves the card selection up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.products.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.products.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.products.get(self.selected_index)
    }

    /// Display name of the selected category.
    #[must_use]
    pub fn category_name(&self) -> &str {
        self.category.as_deref().map_or(ALL_CATEGORIES_LABEL, |id| {
            self.categories
                .iter()
                .find(|c| c.id == id)
                .map_or(id, |c| c.name.as_str())
        })
    }

    #[must_use]
    pub fn sidebar_rows(&self) -> Vec<FilterRow> {
        sidebar_rows(&self.filters, &self.available_filters)
    }

    /// Row under the sidebar cursor.
    #[must_use]
    pub fn sidebar_row(&self) -> Option<FilterRow> {
        self.sidebar_rows().into_iter().nth(self.sidebar_cursor)
    }

    pub fn move_sidebar_cursor(&mut self, down: bool) {
        let len = self.sidebar_rows().len();
        if len == 0 {
            return;
        }
        self.sidebar_cursor = if down {
            (self.sidebar_cursor + 1) % len
        } else {
            self.sidebar_cursor.checked_sub(1).unwrap_or(len - 1)
        };
    }

    /// Keeps the sidebar cursor inside the row list after it shrinks.
    pub fn clamp_sidebar_cursor(&mut self) {
        let len = self.sidebar_rows().len();
        self.sidebar_cursor = self.sidebar_cursor.min(len.saturating_sub(1));
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let banners = self.compute_banners();
        let body_rows = rows.saturating_sub(CHROME_ROWS + banners.len());

        let body = match &self.detail {
            DetailStatus::Open { item, seller } => Body::Detail(Box::new(DetailView {
                title: item.title.clone(),
                primary_image: secure_image_url(item.primary_image()),
                gallery: item.gallery().into_iter().map(secure_image_url).collect(),
                condition: item.condition_label().to_string(),
                sold: (item.sold_quantity > 0).then(|| format!("{} vendidos", item.sold_quantity)),
                price: format_price(item.price, &item.currency_id),
                free_shipping: item.free_shipping(),
                rating: "★★★★★".to_string(),
                seller_nickname: seller.nickname.clone(),
                seller_reputation: seller.reputation_label().to_string(),
                attributes: item
                    .attributes
                    .iter()
                    .flatten()
                    .map(|a| (a.name.clone(), a.value_name.clone().unwrap_or_else(|| "-".to_string())))
                    .collect(),
                action_label: "Ir ao Mercado Livre".to_string(),
            })),
            _ => self.compute_results_body(body_rows, self.body_width(cols)),
        };

        UIViewModel {
            header: HeaderInfo {
                title: APP_TITLE.to_string(),
            },
            search_bar: SearchBarInfo {
                term: self.search_term.clone(),
                editing: self.focus == Focus::SearchInput,
                category: self.category_name().to_string(),
                sort: self.sort.label().to_string(),
            },
            banners,
            body,
            sidebar: self.sidebar_open.then(|| self.compute_sidebar(body_rows)),
            picker: (self.focus == Focus::CategoryPicker).then(|| self.compute_picker(body_rows)),
            footer: self.compute_footer(),
        }
    }

    fn compute_banners(&self) -> Vec<Banner> {
        let mut banners = Vec::new();
        let error = |message: &str| Banner {
            kind: BannerKind::Error,
            message: message.to_string(),
        };
        let info = |message: &str| Banner {
            kind: BannerKind::Info,
            message: message.to_string(),
        };

        match self.search_status {
            SearchStatus::Error(failure) => banners.push(error(failure.message())),
            SearchStatus::Loading => banners.push(info(LOADING_MESSAGE)),
            SearchStatus::Idle | SearchStatus::Success => {}
        }
        if self.categories_failed {
            banners.push(error(CATEGORIES_FAILED_MESSAGE));
        }
        if let Some(message) = self.detail.error_message() {
            banners.push(error(message));
        }
        if self.detail.is_loading() {
            banners.push(info(DETAIL_LOADING_MESSAGE));
        }

        banners
    }

    /// Columns left for the body once the sidebar takes its share.
    #[must_use]
    pub const fn body_width(&self, cols: usize) -> usize {
        if self.sidebar_open {
            cols.saturating_sub(SIDEBAR_WIDTH)
        } else {
            cols
        }
    }

    fn compute_results_body(&self, body_rows: usize, body_width: usize) -> Body {
        match self.search_status {
            SearchStatus::Idle => Body::Empty(EmptyState {
                message: "Busque produtos no Mercado Livre".to_string(),
                subtitle: "Pressione / para digitar um termo de busca".to_string(),
            }),
            SearchStatus::Loading | SearchStatus::Error(_) => Body::Blank,
            SearchStatus::Success => {
                // One row goes to the list title.
                let capacity = (body_rows.saturating_sub(1) / CARD_HEIGHT).max(1);
                let (start, end) = window(self.selected_index, self.products.len(), capacity);

                let cards = self.products[start..end]
                    .iter()
                    .enumerate()
                    .map(|(offset, product)| {
                        let price = format_price(product.price, &product.currency_id);
                        // Selection marker, gap before the price and margin.
                        let title_width = body_width.saturating_sub(width(&price) + 6);
                        ProductCard {
                            title: truncate(&product.title, title_width),
                            price,
                            free_shipping: product.free_shipping(),
                            thumbnail: secure_image_url(&product.thumbnail),
                            is_selected: start + offset == self.selected_index,
                        }
                    })
                    .collect();

                Body::Results(ResultList {
                    title: format!("Resultados da Busca ({})", self.products.len()),
                    cards,
                })
            }
        }
    }

    fn compute_sidebar(&self, body_rows: usize) -> SidebarInfo {
        let is_focused = self.focus == Focus::Filters;
        let mut lines = Vec::new();
        let mut selected_line = 0;

        let heading = |text: &str| SidebarLine {
            text: text.to_string(),
            is_heading: true,
            is_selected: false,
        };

        for (index, row) in self.sidebar_rows().iter().enumerate() {
            match row {
                FilterRow::Price(PriceBound::Min) => lines.push(heading("Faixa de Preço")),
                FilterRow::Condition(Condition::All) => lines.push(heading("Condição")),
                FilterRow::FacetHeader { facet_id } if self.available_filters.first().is_some_and(|f| &f.id == facet_id) => {
                    lines.push(heading("Filtros Adicionais"));
                }
                _ => {}
            }

            let is_selected = is_focused && index == self.sidebar_cursor;
            if is_selected {
                selected_line = lines.len();
            }
            lines.push(SidebarLine {
                text: self.sidebar_row_text(row, is_selected),
                is_heading: false,
                is_selected,
            });
        }

        // The renderer spends the first row on the title.
        let capacity = body_rows.saturating_sub(1).max(1);
        let (start, end) = window(selected_line, lines.len(), capacity);
        SidebarInfo {
            title: "Filtros".to_string(),
            lines: lines[start..end].to_vec(),
        }
    }

    fn sidebar_row_text(&self, row: &FilterRow, is_selected: bool) -> String {
        let check = |on: bool| if on { "[x]" } else { "[ ]" };
        match row {
            FilterRow::Price(bound) => {
                let label = match bound {
                    PriceBound::Min => "Mín",
                    PriceBound::Max => "Máx",
                };
                let cursor = if is_selected { "_" } else { "" };
                format!("{label}: {}{cursor}", self.filters.price_bound(*bound))
            }
            FilterRow::Condition(condition) => {
                let radio = if self.filters.condition == *condition { "(•)" } else { "( )" };
                format!("{radio} {}", condition.label())
            }
            FilterRow::FreeShipping => format!("{} Apenas Frete Grátis", check(self.filters.free_shipping)),
            FilterRow::FacetHeader { facet_id } => {
                let name = self
                    .available_filters
                    .iter()
                    .find(|f| &f.id == facet_id)
                    .map_or(facet_id.as_str(), |f| f.name.as_str());
                let arrow = if self.filters.is_expanded(facet_id) { "▾" } else { "▸" };
                format!("{arrow} {name}")
            }
            FilterRow::FacetValue { facet_id, value_id } => {
                let value = self
                    .available_filters
                    .iter()
                    .find(|f| &f.id == facet_id)
                    .and_then(|f| f.values.iter().find(|v| &v.id == value_id));
                let (name, results) = value.map_or((value_id.as_str(), 0), |v| (v.name.as_str(), v.results));
                format!(
                    "  {} {name} ({results})",
                    check(self.filters.is_selected(facet_id, value_id))
                )
            }
        }
    }

    fn compute_picker(&self, body_rows: usize) -> PickerInfo {
        let entries = self.picker.entries(&self.categories);
        // Box border and query line.
        let capacity = body_rows.saturating_sub(4).max(1);
        let (start, end) = window(self.picker.selected_index, entries.len(), capacity);

        let items = entries[start..end]
            .iter()
            .enumerate()
            .map(|(offset, entry)| PickerItem {
                name: entry.name.clone(),
                is_selected: start + offset == self.picker.selected_index,
                highlight_ranges: entry.highlight_ranges.clone(),
            })
            .collect();

        PickerInfo {
            query: self.picker.query.clone(),
            items,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            Focus::Results => {
                "/: buscar  c: categoria  s: ordenar  f: filtros  j/k: navegar  Enter: detalhes  q: sair"
            }
            Focus::SearchInput => "Enter: buscar  Esc: cancelar  Digite o termo de busca",
            Focus::CategoryPicker => "Enter: escolher  Esc: cancelar  Ctrl+n/p: navegar  Digite para filtrar",
            Focus::Filters => {
                "j/k: navegar  Espaço: marcar  a: Aplicar Filtros  r: Limpar Filtros  Esc: fechar"
            }
            Focus::Detail => "Enter/o: Ir ao Mercado Livre  Esc/q: fechar",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Visible `[start, end)` window of `capacity` items that keeps `selected`
/// roughly centered and fills the window when near either end.
fn window(selected: usize, len: usize, capacity: usize) -> (usize, usize) {
    if len <= capacity {
        return (0, len);
    }
    let start = selected.saturating_sub(capacity / 2).min(len - capacity);
    (start, start + capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::{SellerRef, Shipping};

    fn product(i: usize) -> Product {
        Product {
            id: format!("MLB{i}"),
            title: format!("Notebook {i}"),
            price: 3499.0,
            currency_id: "BRL".to_string(),
            thumbnail: format!("http://http2.mlstatic.com/D_{i}.jpg"),
            shipping: Shipping { free_shipping: i % 2 == 0 },
            seller: SellerRef { id: 1 },
        }
    }

    fn state() -> AppState {
        AppState::new(Theme::default(), CatalogEndpoints::default())
    }

    #[test]
    fn window_centers_and_clamps() {
        assert_eq!(window(0, 3, 5), (0, 3));
        assert_eq!(window(0, 10, 4), (0, 4));
        assert_eq!(window(5, 10, 4), (3, 7));
        assert_eq!(window(9, 10, 4), (6, 10));
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state();
        state.products = (0..3).map(product).collect();

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn idle_state_shows_empty_body() {
        let vm = state().compute_viewmodel(24, 80);
        assert!(matches!(vm.body, Body::Empty(_)));
        assert!(vm.banners.is_empty());
        assert_eq!(vm.search_bar.category, ALL_CATEGORIES_LABEL);
        assert_eq!(vm.search_bar.sort, "Relevância");
    }

    #[test]
    fn success_renders_formatted_cards() {
        let mut state = state();
        state.products = vec![product(0)];
        state.search_status = SearchStatus::Success;

        let vm = state.compute_viewmodel(24, 80);
        let Body::Results(list) = vm.body else {
            panic!("expected results");
        };
        assert_eq!(list.title, "Resultados da Busca (1)");
        assert_eq!(list.cards[0].price, "R$\u{a0}3.499,00");
        assert_eq!(list.cards[0].thumbnail, "https://http2.mlstatic.com/D_0.jpg");
        assert!(list.cards[0].free_shipping);
        assert!(list.cards[0].is_selected);
    }

    #[test]
    fn long_result_lists_are_windowed() {
        let mut state = state();
        state.products = (0..50).map(product).collect();
        state.search_status = SearchStatus::Success;
        state.selected_index = 49;

        let Body::Results(list) = state.compute_viewmodel(24, 80).body else {
            panic!("expected results");
        };
        assert!(list.cards.len() < 50);
        assert!(list.cards.last().is_some_and(|c| c.is_selected));
        assert_eq!(list.title, "Resultados da Busca (50)");
    }

    #[test]
    fn loading_and_error_banners() {
        let mut state = state();
        state.search_status = SearchStatus::Loading;
        state.categories_failed = true;

        let vm = state.compute_viewmodel(24, 80);
        let messages: Vec<_> = vm.banners.iter().map(|b| b.message.as_str()).collect();
        assert_eq!(messages, vec![LOADING_MESSAGE, CATEGORIES_FAILED_MESSAGE]);
        assert_eq!(vm.body, Body::Blank);
    }

    #[test]
    fn category_name_falls_back_to_id() {
        let mut state = state();
        state.category = Some("MLB1648".to_string());
        assert_eq!(state.category_name(), "MLB1648");

        state.categories = vec![Category {
            id: "MLB1648".to_string(),
            name: "Informática".to_string(),
        }];
        assert_eq!(state.category_name(), "Informática");
    }

    #[test]
    fn sidebar_window_keeps_the_cursor_below_the_title() {
        let mut state = state();
        state.available_filters = (0..6)
            .map(|f| AvailableFilter {
                id: format!("FACET_{f}"),
                name: format!("Faceta {f}"),
                values: (0..5)
                    .map(|v| crate::domain::FilterValue {
                        id: v.to_string(),
                        name: format!("Valor {v}"),
                        results: 1,
                    })
                    .collect(),
            })
            .collect();
        state.sidebar_open = true;
        state.focus = Focus::Filters;
        state.move_sidebar_cursor(false);
        assert_eq!(state.sidebar_cursor, state.sidebar_rows().len() - 1);

        // 24 rows, no banners: 16 body rows, one of them the sidebar title.
        let body_rows = 24 - CHROME_ROWS;
        let sidebar = state.compute_viewmodel(24, 120).sidebar.unwrap();
        let selected = sidebar.lines.iter().position(|l| l.is_selected).unwrap();

        assert!(sidebar.lines.len() <= body_rows - 1);
        assert!(selected < body_rows - 1);
    }
}
