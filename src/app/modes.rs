//! Focus state for the plugin UI.
//!
//! Exactly one region of the screen owns the keyboard at a time. The focus
//! decides which keybindings the shim maps, what the footer advertises and
//! how the handler interprets `Submit`, `Escape` and typed characters.
//!
//! ```text
//!              ┌──── / ────▶ SearchInput ── Enter/Esc ──┐
//!              │                                        │
//! Results ─────┼──── c ────▶ CategoryPicker ─ Enter/Esc ┤
//!    ▲         │                                        │
//!    │         ├──── f ────▶ Filters ─── a / Esc / f ───┤
//!    │         │                                        │
//!    │         └─ Enter ──▶ (detail loads) ─▶ Detail ─ Esc
//!    └───────────────────────────────────────────────────┘
//! ```

/// Region of the UI that currently receives input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Navigating the result cards. Single-letter commands are active.
    #[default]
    Results,

    /// Typing the search term. Every printable key is text.
    SearchInput,

    /// Filtering and choosing a category. Every printable key is text.
    CategoryPicker,

    /// Moving through the filter sidebar rows.
    ///
    /// Digits and separators type into the price rows; other letters are
    /// sidebar commands.
    Filters,

    /// The product detail modal is open.
    Detail,
}
