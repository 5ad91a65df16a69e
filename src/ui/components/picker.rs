//! Category picker overlay renderer.

use crate::ui::format::{truncate, width};
use crate::ui::helpers::{position_cursor, print_padded, render_highlighted_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PickerInfo;

const PICKER_MAX_WIDTH: usize = 48;

/// Draws a bordered box over the body area: a query line, then the entries.
pub fn render_picker(row: usize, col: usize, picker: &PickerInfo, theme: &Theme, area_width: usize) {
    let box_width = area_width.saturating_sub(4).min(PICKER_MAX_WIDTH);
    let inner = box_width.saturating_sub(2);
    let left = col + area_width.saturating_sub(box_width) / 2;
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(row, left);
    print!("{border}┌{}┐{}", "─".repeat(inner), Theme::reset());

    position_cursor(row + 1, left);
    print!("{border}│{}", Theme::fg(&theme.colors.text_normal));
    print_padded(&truncate(&format!(" Categoria: {}_", picker.query), inner), inner);
    print!("{border}│{}", Theme::reset());

    let mut current_row = row + 2;
    for item in &picker.items {
        position_cursor(current_row, left);
        print!("{border}│");
        if item.is_selected {
            print!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        // Highlight ranges index the untruncated name, so only draw them when it fits.
        let name = truncate(&item.name, inner.saturating_sub(2));
        print!("  ");
        if name == item.name {
            render_highlighted_text(&name, &item.highlight_ranges, theme, item.is_selected);
        } else {
            print!("{name}");
        }
        print!("{}", " ".repeat(inner.saturating_sub(2 + width(&name))));
        print!("{}{border}│{}", Theme::reset(), Theme::reset());
        current_row += 1;
    }

    position_cursor(current_row, left);
    print!("{border}└{}┘{}", "─".repeat(inner), Theme::reset());
}
