//! Shared rendering utilities.
//!
//! All widths here are counted in chars, not bytes, since catalog text is
//! full of accented Portuguese.

use crate::ui::format::width;
use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text` and pads with spaces up to `total` cells.
pub fn print_padded(text: &str, total: usize) {
    print!("{text}");
    print!("{}", " ".repeat(total.saturating_sub(width(text))));
}

/// Prints `text` with `ranges` highlighted using the match colors.
///
/// Ranges are `(start, end)` char indices with exclusive end. On a selected
/// row the selection colors win and no highlighting is drawn.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start.max(current_pos)..end.max(current_pos)].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = current_pos.max(end);
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
