//! Status banners under the search box.

use crate::ui::format::truncate;
use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Banner, BannerKind};

/// Renders one line per banner. Returns the next free row.
pub fn render_banners(row: usize, banners: &[Banner], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for banner in banners {
        let color = match banner.kind {
            BannerKind::Error => &theme.colors.error_fg,
            BannerKind::Info => &theme.colors.info_fg,
        };

        position_cursor(current_row, 1);
        print!("{}", Theme::fg(color));
        if banner.kind == BannerKind::Error {
            print!("{}", Theme::bold());
        }
        print_padded(&truncate(&format!("  {}", banner.message), cols), cols);
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row
}
