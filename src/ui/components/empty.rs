//! Empty state component renderer.

use crate::ui::format::{truncate, width};
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a two-line centered message inside a `width`-wide area at `col`.
pub fn render_empty_state(row: usize, col: usize, empty: &EmptyState, theme: &Theme, area_width: usize) {
    let message = truncate(&empty.message, area_width);
    let msg_padding = area_width.saturating_sub(width(&message)) / 2;

    position_cursor(row + 2, col);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{message}");
    print!("{}", Theme::reset());

    let subtitle = truncate(&empty.subtitle, area_width);
    let sub_padding = area_width.saturating_sub(width(&subtitle)) / 2;

    position_cursor(row + 3, col);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{subtitle}");
    print!("{}", Theme::reset());
}
