//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `compute_viewmodel` and hold
//! only display-ready data: formatted prices, upgraded image URLs, windowed
//! lists and pre-computed highlight ranges. Rendering never looks at
//! application state directly.

/// Columns taken by the filter sidebar, separator included.
pub const SIDEBAR_WIDTH: usize = 34;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    pub search_bar: SearchBarInfo,

    /// Status lines under the search bar, in display order.
    pub banners: Vec<Banner>,

    /// Main area content.
    pub body: Body,

    /// Filter sidebar, when open.
    pub sidebar: Option<SidebarInfo>,

    /// Category picker overlay, when open.
    pub picker: Option<PickerInfo>,

    pub footer: FooterInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Search form summary: term, category and sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub term: String,

    /// Whether the term is being edited (shows a cursor).
    pub editing: bool,

    /// Display name of the selected category.
    pub category: String,

    /// Label of the selected sort mode.
    pub sort: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

/// What fills the main area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Nothing to show (loading or failed search; the banner explains).
    Blank,
    /// Nothing searched yet.
    Empty(EmptyState),
    Results(ResultList),
    Detail(Box<DetailView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Windowed result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultList {
    /// "Resultados da Busca (N)" with the full result count.
    pub title: String,
    pub cards: Vec<ProductCard>,
}

/// One result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub title: String,
    /// Price formatted in the product's own currency.
    pub price: String,
    pub free_shipping: bool,
    /// Thumbnail URL, always `https`.
    pub thumbnail: String,
    pub is_selected: bool,
}

/// Product detail modal content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub primary_image: String,
    /// Up to five gallery URLs, empty for single-picture listings.
    pub gallery: Vec<String>,
    pub condition: String,
    /// "N vendidos", absent when nothing was sold.
    pub sold: Option<String>,
    pub price: String,
    pub free_shipping: bool,
    /// Decorative, not derived from the seller's rating.
    pub rating: String,
    pub seller_nickname: String,
    pub seller_reputation: String,
    /// `(name, value)` pairs, `-` for missing values.
    pub attributes: Vec<(String, String)>,
    pub action_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarInfo {
    pub title: String,
    pub lines: Vec<SidebarLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLine {
    pub text: String,
    /// Section titles are not selectable.
    pub is_heading: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerInfo {
    pub query: String,
    pub items: Vec<PickerItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerItem {
    pub name: String,
    pub is_selected: bool,
    /// Character ranges to highlight, `(start, end)` in char indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}
