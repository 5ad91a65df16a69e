//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents with a name and a flat color table. Two themes
//! are built in and embedded at compile time; a custom file can be supplied
//! through the `theme_file` configuration key.
//!
//! # Built-in Themes
//!
//! - `mercado`: Marketplace yellow and blue (default)
//! - `catppuccin-mocha`: Dark theme with warm tones
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#2d3277"
//! header_bg = "#ffe600"          # optional
//! selection_fg = "#ffffff"
//! selection_bg = "#3483fa"
//! text_normal = "#e6e6e6"
//! text_dim = "#8c8c8c"
//! border = "#4a4a4a"
//! search_bar_border = "#ffe600"
//! match_highlight_fg = "#2d3277"
//! match_highlight_bg = "#ffe600"
//! empty_state_fg = "#3483fa"
//! heading_fg = "#ffe600"
//! price_fg = "#ffffff"
//! free_shipping_fg = "#00a650"
//! error_fg = "#f23d4f"
//! info_fg = "#3483fa"
//! rating_fg = "#ffe600"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{BuscaError, Result};

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "mercado";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card, row or picker entry.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, thumbnails and other secondary text.
    pub text_dim: String,

    /// Separator lines.
    pub border: String,

    pub search_bar_border: String,
    /// Fuzzy match highlight in the category picker.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Section titles in the sidebar and detail modal.
    pub heading_fg: String,

    pub price_fg: String,
    /// "Frete Grátis" badge.
    pub free_shipping_fg: String,

    /// Error banners.
    pub error_fg: String,
    /// Loading banners.
    pub info_fg: String,

    /// Star glyphs in the detail modal.
    pub rating_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is unknown.
    ///
    /// # Example
    ///
    /// ```
    /// use mercado_busca::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-mocha").unwrap();
    /// assert_eq!(theme.name, "catppuccin-mocha");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "mercado" => include_str!("../../themes/mercado.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BuscaError::Io`] if the file cannot be read and
    /// [`BuscaError::Theme`] if it is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| BuscaError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Parses `#rrggbb` into RGB. Malformed colors fall back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `mercado` theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in mercado theme should always parse")
    }
}
