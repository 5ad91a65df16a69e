//! Product detail modal renderer.
//!
//! Replaces the result list while open. Sections, top to bottom: title,
//! images, condition and sales, price and shipping, seller, attributes, and
//! the call to action. Lines beyond the available height are dropped.

use crate::ui::format::truncate;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// One styled line of the modal.
enum Line {
    Title(String),
    Heading(&'static str),
    Text(String),
    Dim(String),
    Price(String, bool),
    Rating(String, String),
    Action(String),
    Blank,
}

fn layout(detail: &DetailView) -> Vec<Line> {
    let mut lines = vec![Line::Title(detail.title.clone()), Line::Blank];

    lines.push(Line::Heading("Imagens"));
    lines.push(Line::Dim(detail.primary_image.clone()));
    lines.extend(detail.gallery.iter().map(|url| Line::Dim(format!("  {url}"))));
    lines.push(Line::Blank);

    let mut status = detail.condition.clone();
    if let Some(sold) = &detail.sold {
        status.push_str(" | ");
        status.push_str(sold);
    }
    lines.push(Line::Text(status));
    lines.push(Line::Price(detail.price.clone(), detail.free_shipping));
    lines.push(Line::Blank);

    lines.push(Line::Heading("Vendedor"));
    lines.push(Line::Text(detail.seller_nickname.clone()));
    lines.push(Line::Rating(detail.rating.clone(), detail.seller_reputation.clone()));
    lines.push(Line::Blank);

    if !detail.attributes.is_empty() {
        lines.push(Line::Heading("Características"));
        lines.extend(
            detail
                .attributes
                .iter()
                .map(|(name, value)| Line::Text(format!("{name}: {value}"))),
        );
        lines.push(Line::Blank);
    }

    lines.push(Line::Action(detail.action_label.clone()));
    lines
}

/// Renders the modal at `row`/`col` within `area_width` x `height`.
pub fn render_detail(row: usize, col: usize, detail: &DetailView, theme: &Theme, area_width: usize, height: usize) {
    let text_width = area_width.saturating_sub(4);
    let mut lines = layout(detail);

    // Keep the call to action visible when the attribute list overflows.
    if lines.len() > height && height > 0 {
        if let Some(action) = lines.pop() {
            lines.truncate(height - 1);
            lines.push(action);
        }
    }

    for (offset, line) in lines.iter().enumerate() {
        position_cursor(row + offset, col + 2);
        match line {
            Line::Title(text) => {
                print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
                print!("{}", truncate(text, text_width));
            }
            Line::Heading(text) => {
                print!("{}{}{text}", Theme::bold(), Theme::fg(&theme.colors.heading_fg));
            }
            Line::Text(text) => {
                print!("{}{}", Theme::fg(&theme.colors.text_normal), truncate(text, text_width));
            }
            Line::Dim(text) => {
                print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
                print!("{}", truncate(text, text_width));
            }
            Line::Price(price, free_shipping) => {
                print!("{}{}{price}{}", Theme::bold(), Theme::fg(&theme.colors.price_fg), Theme::reset());
                if *free_shipping {
                    print!("  {}Frete Grátis", Theme::fg(&theme.colors.free_shipping_fg));
                }
            }
            Line::Rating(stars, reputation) => {
                print!("{}{stars}{}", Theme::fg(&theme.colors.rating_fg), Theme::reset());
                print!("  {}{reputation}", Theme::fg(&theme.colors.text_dim));
            }
            Line::Action(label) => {
                print!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg));
                print!("{}", Theme::bold());
                print!(" {label} ");
            }
            Line::Blank => {}
        }
        print!("{}", Theme::reset());
    }
}
