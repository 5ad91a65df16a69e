//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready UI state
//! - [`renderer`]: Rendering entry point
//! - [`components`]: Component renderers and frame layout
//! - [`format`]: Price, URL and text width formatting
//! - [`helpers`]: Cursor positioning and match highlighting
//! - [`theme`]: Color schemes and ANSI escapes

pub mod components;
pub mod format;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Banner, BannerKind, Body, DetailView, EmptyState, FooterInfo, HeaderInfo, PickerInfo, PickerItem, ProductCard,
    ResultList, SearchBarInfo, SidebarInfo, SidebarLine, UIViewModel,
};
