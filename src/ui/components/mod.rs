//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`search_bar`]: Term, category and sort box
//! - [`banner`]: Loading and error lines
//! - [`results`]: Result cards
//! - [`detail`]: Product detail modal
//! - [`sidebar`]: Filter sidebar
//! - [`picker`]: Category picker overlay
//! - [`empty`]: Placeholder before the first search
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search box - 3 lines]
//! [Banners - one line each]
//! [Sidebar │ Body (results, detail or empty state)]
//! [Border]
//! [Footer]
//! ```
//!
//! The picker is drawn last, over the body.

mod banner;
mod detail;
mod empty;
mod footer;
mod header;
mod picker;
mod results;
mod search_bar;
mod sidebar;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel, SIDEBAR_WIDTH};

use banner::render_banners;
use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use picker::render_picker;
use results::render_result_list;
use search_bar::render_search_bar;
use sidebar::render_sidebar;

/// Renders a horizontal border line at `row`. Returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame for a `cols` x `rows` pane.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Row 1 stays blank.

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_banners(current_row, &vm.banners, theme, cols);

    let footer_row = rows;
    let border_row = rows.saturating_sub(1);
    let body_height = border_row.saturating_sub(current_row);

    let (body_col, body_width) = match &vm.sidebar {
        Some(sidebar) => {
            render_sidebar(current_row, sidebar, theme, body_height);
            (SIDEBAR_WIDTH + 1, cols.saturating_sub(SIDEBAR_WIDTH))
        }
        None => (1, cols),
    };

    match &vm.body {
        Body::Blank => {}
        Body::Empty(empty) => render_empty_state(current_row, body_col, empty, theme, body_width),
        Body::Results(list) => {
            render_result_list(current_row, body_col, list, theme, body_width);
        }
        Body::Detail(detail) => render_detail(current_row, body_col, detail, theme, body_width, body_height),
    }

    if let Some(picker) = &vm.picker {
        render_picker(current_row, body_col, picker, theme, body_width);
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
