//! Filter sidebar renderer.

use crate::ui::format::truncate;
use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SidebarInfo, SIDEBAR_WIDTH};

/// Renders the sidebar in the left columns from `row` down `height` rows,
/// with a vertical separator on its right edge.
pub fn render_sidebar(row: usize, sidebar: &SidebarInfo, theme: &Theme, height: usize) {
    let inner = SIDEBAR_WIDTH - 2;

    for offset in 0..height {
        position_cursor(row + offset, 1);

        match offset.checked_sub(1).and_then(|i| sidebar.lines.get(i)) {
            _ if offset == 0 => {
                print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
                print_padded(&format!(" {}", sidebar.title), inner);
            }
            Some(line) if line.is_heading => {
                print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.heading_fg));
                print_padded(&truncate(&format!(" {}", line.text), inner), inner);
            }
            Some(line) if line.is_selected => {
                print!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg));
                print_padded(&truncate(&format!(" {}", line.text), inner), inner);
            }
            Some(line) => {
                print!("{}", Theme::fg(&theme.colors.text_normal));
                print_padded(&truncate(&format!(" {}", line.text), inner), inner);
            }
            None => print!("{}", " ".repeat(inner)),
        }

        print!("{}", Theme::reset());
        print!(" {}│{}", Theme::fg(&theme.colors.border), Theme::reset());
    }
}
