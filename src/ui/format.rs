//! Display formatting for prices, image URLs and fixed-width text.

/// Currencies shown without fraction digits.
const ZERO_DECIMAL_CURRENCIES: &[&str] = &["CLP", "JPY", "KRW", "PYG", "VND"];

const NO_BREAK_SPACE: char = '\u{a0}';

fn currency_symbol(currency_id: &str) -> &str {
    match currency_id {
        "BRL" => "R$",
        "USD" => "US$",
        "EUR" => "€",
        "MXN" => "MX$",
        "JPY" => "JP¥",
        other => other,
    }
}

/// Formats an amount the way Brazilian Portuguese displays currency.
///
/// The symbol is followed by a no-break space, thousands are grouped with `.`
/// and decimals use `,`.
///
/// # Examples
///
/// ```
/// use mercado_busca::ui::format::format_price;
///
/// assert_eq!(format_price(1234.5, "BRL"), "R$\u{a0}1.234,50");
/// assert_eq!(format_price(1500.0, "CLP"), "CLP\u{a0}1.500");
/// ```
#[must_use]
pub fn format_price(amount: f64, currency_id: &str) -> String {
    let digits = if ZERO_DECIMAL_CURRENCIES.contains(&currency_id) { 0 } else { 2 };
    let fixed = format!("{:.*}", digits, amount.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    let symbol = currency_symbol(currency_id);

    if fraction.is_empty() {
        format!("{sign}{symbol}{NO_BREAK_SPACE}{grouped}")
    } else {
        format!("{sign}{symbol}{NO_BREAK_SPACE}{grouped},{fraction}")
    }
}

/// Upgrades an `http://` image URL to `https://`. Other URLs pass through.
#[must_use]
pub fn secure_image_url(url: &str) -> String {
    url.strip_prefix("http://")
        .map_or_else(|| url.to_string(), |rest| format!("https://{rest}"))
}

/// Cuts `text` to at most `width` characters, ending in `...` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}

/// Display width in terminal cells, counting one cell per char.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}
