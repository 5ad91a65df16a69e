//! Search form component renderer.
//!
//! A three-line box holding the term on the left and the category and sort
//! selections on the right:
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │ Busca: notebook_       Informática · Preço: Menor para Maior │
//!   └──────────────────────────────────────────────────────────────┘
//! ```

use crate::ui::format::{truncate, width};
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin on each side of the box.
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the search box starting at `row`. Returns the row after it.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let cursor = if search.editing { "_" } else { "" };
    let selections = format!("{} · {} ", search.category, search.sort);
    let term_width = inner_width.saturating_sub(width(&selections) + 1);
    let term_text = truncate(&format!(" Busca: {}{cursor}", search.term), term_width);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}│");
    if search.editing {
        print!("{}", Theme::bold());
    }
    print!("{}{term_text}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
    let used = width(&term_text);
    let selections = truncate(&selections, inner_width.saturating_sub(used));
    print!("{}", " ".repeat(inner_width.saturating_sub(used + width(&selections))));
    print!("{}{selections}", Theme::fg(&theme.colors.text_dim));
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 3
}
