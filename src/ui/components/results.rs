//! Result list component renderer.
//!
//! Each card takes two lines:
//!
//! ```text
//! ▌ Notebook Gamer 15.6" 16GB                          R$ 4.299,90
//!   Frete Grátis  https://http2.mlstatic.com/D_1.jpg
//! ```

use crate::ui::format::{truncate, width};
use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ProductCard, ResultList};

const FREE_SHIPPING_BADGE: &str = "Frete Grátis";

/// Renders the list title and its cards. Returns the next free row.
pub fn render_result_list(row: usize, col: usize, list: &ResultList, theme: &Theme, area_width: usize) -> usize {
    position_cursor(row, col);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.heading_fg));
    print_padded(&format!(" {}", list.title), area_width);
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for card in &list.cards {
        current_row = render_card(current_row, col, card, theme, area_width);
    }
    current_row
}

fn render_card(row: usize, col: usize, card: &ProductCard, theme: &Theme, area_width: usize) -> usize {
    position_cursor(row, col);
    if card.is_selected {
        print!("{}{}▌ ", Theme::fg(&theme.colors.selection_bg), Theme::bold());
        print!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}  ", Theme::fg(&theme.colors.text_normal));
    }
    let price_width = width(&card.price);
    let title_width = area_width.saturating_sub(price_width + 4);
    print_padded(&card.title, title_width);
    print!("{}", Theme::reset());
    print!(" {}{}{}", Theme::bold(), Theme::fg(&theme.colors.price_fg), card.price);
    print!("{}", Theme::reset());

    position_cursor(row + 1, col);
    print!("  ");
    let mut used = 2;
    if card.free_shipping {
        print!("{}{FREE_SHIPPING_BADGE}{}  ", Theme::fg(&theme.colors.free_shipping_fg), Theme::reset());
        used += width(FREE_SHIPPING_BADGE) + 2;
    }
    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print!("{}", truncate(&card.thumbnail, area_width.saturating_sub(used)));
    print!("{}", Theme::reset());

    row + 2
}
