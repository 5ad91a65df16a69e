//! Mercado Busca: a Zellij plugin for searching the Mercado Livre catalog.
//!
//! The plugin provides:
//! - Keyword search scoped to a category, with relevance and price ordering
//! - A filter sidebar with price bounds, item condition, free shipping and
//!   the facets the catalog reports for the current result set
//! - Result cards with pt-BR prices and a detail view joining item and seller
//! - A fuzzy category picker
//! - OTLP traces written to a rotating file

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← keys, web requests
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← focus state machine
//! │  - Event handling                                   │  ← search orchestration
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Domain        │
//! │ (ui/)         │   │ (catalog/)    │   │ (domain/)     │
//! │ - Rendering   │   │ - Query URLs  │   │ - Wire types  │
//! │ - Theming     │   │ - Request tags│   │ - Filter store│
//! │ - Components  │   │ - Decoding    │   │ - Errors      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//! ```
//!
//! The application layer never performs I/O. It returns [`Action`]s that the
//! shim turns into host calls, and catalog responses come back as
//! [`Event::CatalogResponse`] carrying the request they answer.

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Focus};
pub use catalog::CatalogEndpoints;
pub use domain::{BuscaError, Result};
pub use ui::Theme;

use catalog::{DEFAULT_API_BASE, DEFAULT_SITE_ID};
use std::collections::BTreeMap;

/// Command used to open product permalinks when none is configured.
pub const DEFAULT_OPEN_COMMAND: &str = "xdg-open";

/// Plugin configuration parsed from the layout's plugin block.
///
/// ```kdl
/// plugin location="file:/path/to/mercado-busca.wasm" {
///     site_id "MLB"
///     open_command "xdg-open"
///     theme "catppuccin-mocha"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the catalog API. Default: `https://api.mercadolibre.com`
    pub api_base: String,

    /// Marketplace site the search and category endpoints are scoped to.
    /// Default: `MLB`
    pub site_id: String,

    /// Full search URL overriding `{api_base}/sites/{site_id}/search`.
    pub search_endpoint: Option<String>,

    /// Program invoked with a product permalink. Default: `xdg-open`
    pub open_command: String,

    /// Built-in theme name: `mercado` or `catppuccin-mocha`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. `~` expands to the host home directory.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            site_id: DEFAULT_SITE_ID.to_string(),
            search_endpoint: None,
            open_command: DEFAULT_OPEN_COMMAND.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the string map Zellij hands to `load`.
    ///
    /// Missing or blank values fall back to their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use mercado_busca::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("site_id".to_string(), "MLA".to_string());
    /// map.insert("open_command".to_string(), "open".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.site_id, "MLA");
    /// assert_eq!(config.open_command, "open");
    /// assert_eq!(config.api_base, "https://api.mercadolibre.com");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            api_base: get("api_base").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            site_id: get("site_id").unwrap_or_else(|| DEFAULT_SITE_ID.to_string()),
            search_endpoint: get("search_endpoint"),
            open_command: get("open_command").unwrap_or_else(|| DEFAULT_OPEN_COMMAND.to_string()),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Checks that the configured URLs can be used for web requests.
    ///
    /// # Errors
    ///
    /// Returns [`BuscaError::Config`] when `api_base` or `search_endpoint`
    /// is not an http(s) URL, or when `site_id` contains anything other
    /// than ASCII letters.
    pub fn validate(&self) -> Result<()> {
        let is_http = |url: &str| url.starts_with("https://") || url.starts_with("http://");

        if !is_http(&self.api_base) {
            return Err(BuscaError::Config(format!(
                "api_base must be an http(s) URL: {}",
                self.api_base
            )));
        }
        if let Some(search) = self.search_endpoint.as_deref().filter(|s| !is_http(s)) {
            return Err(BuscaError::Config(format!(
                "search_endpoint must be an http(s) URL: {search}"
            )));
        }
        if !self.site_id.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(BuscaError::Config(format!(
                "site_id must be alphabetic: {}",
                self.site_id
            )));
        }
        Ok(())
    }

    /// Resolves the endpoint set, falling back to the public API when the
    /// configuration does not validate.
    #[must_use]
    pub fn endpoints(&self) -> CatalogEndpoints {
        match self.validate() {
            Ok(()) => CatalogEndpoints::new(
                &self.api_base,
                &self.site_id,
                self.search_endpoint.as_deref(),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "invalid catalog configuration, using defaults");
                CatalogEndpoints::default()
            }
        }
    }

    /// Loads the configured theme: `theme_file` first, then `theme`, then the
    /// built-in default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::debug!(theme_file = %path, error = %e, "failed to load theme file, using default");
                    return Theme::default();
                }
            }
        }

        self.theme_name.as_deref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial application state from configuration.
///
/// Nothing is fetched here: the category list is requested once the host
/// grants web access.
///
/// ```rust
/// use mercado_busca::{initialize, Config, Focus};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.focus, Focus::Results);
/// assert!(state.products.is_empty());
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(site_id = %config.site_id, "initializing mercado busca plugin");
    AppState::new(config.theme(), config.endpoints())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_zellij(&map(&[("site_id", "  "), ("theme", "")]));
        assert_eq!(config.site_id, DEFAULT_SITE_ID);
        assert_eq!(config.theme_name, None);
    }

    #[test]
    fn reads_every_key() {
        let config = Config::from_zellij(&map(&[
            ("api_base", "http://localhost:8080"),
            ("site_id", "MLA"),
            ("search_endpoint", "http://localhost:8080/search"),
            ("open_command", "open"),
            ("theme", "catppuccin-mocha"),
            ("theme_file", "~/theme.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.site_id, "MLA");
        assert_eq!(config.search_endpoint.as_deref(), Some("http://localhost:8080/search"));
        assert_eq!(config.open_command, "open");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-mocha"));
        assert_eq!(config.theme_file.as_deref(), Some("~/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn custom_search_endpoint_is_used() {
        let config = Config::from_zellij(&map(&[("search_endpoint", "http://localhost/search")]));
        assert_eq!(config.endpoints().search(), "http://localhost/search");
    }

    #[test]
    fn invalid_api_base_is_rejected() {
        let config = Config {
            api_base: "ftp://example.com".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(BuscaError::Config(_))));
        assert_eq!(config.endpoints(), CatalogEndpoints::default());
    }

    #[test]
    fn invalid_site_id_is_rejected() {
        let config = Config {
            site_id: "../MLB".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_theme_name_falls_back_to_default() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Config::default()
        };
        assert_eq!(config.theme().name, Theme::default().name);
    }

    #[test]
    fn missing_theme_file_falls_back_to_default() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            theme_name: Some("catppuccin-mocha".to_string()),
            ..Config::default()
        };
        assert_eq!(config.theme().name, Theme::default().name);
    }

    #[test]
    fn theme_file_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mocha = include_str!("../themes/catppuccin-mocha.toml")
            .replacen("catppuccin-mocha", "custom", 1);
        std::fs::write(&path, mocha).unwrap();

        let config = Config {
            theme_file: Some(path.to_string_lossy().into_owned()),
            theme_name: Some("mercado".to_string()),
            ..Config::default()
        };
        assert_eq!(config.theme().name, "custom");
    }
}
