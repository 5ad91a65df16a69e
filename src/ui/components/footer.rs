//! Footer component renderer.

use crate::ui::format::{truncate, width};
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered and dimmed. Returns the next row.
///
/// Hints wider than the pane are truncated so they never wrap.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = width(&help_text);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
