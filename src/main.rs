//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the Mercado Busca library and
//! the Zellij plugin API. It maps host events to library [`Event`]s and runs
//! the [`Action`]s the library returns.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, build `AppState`
//! 2. **Permissions**: request `WebAccess`, `RunCommands` and `FullHdAccess`
//! 3. **Granted**: the library asks for the category list
//! 4. **Update**: keys and web responses go through `handle_event`
//! 5. **Render**: delegate to the library renderer
//!
//! # Web Requests
//!
//! Every fetch is tagged with its serialized `CatalogRequest` in the request
//! context. Zellij echoes the context back in `WebRequestResult`, which is
//! how a response finds the operation that issued it. Responses whose tag
//! cannot be decoded are logged and dropped.
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: move down / up
//!
//! Results:
//! - `j`/`k`/arrows: move selection
//! - `Enter`: open product details
//! - `/`: edit the search term
//! - `c`: pick a category
//! - `s`: cycle sort order
//! - `f`: open the filter sidebar
//! - `Esc`: dismiss a detail error
//! - `q`: close the plugin
//!
//! Search box and category picker:
//! - printable keys type, `Backspace` deletes
//! - `Enter`: search / pick, `Esc`: leave
//!
//! Filter sidebar:
//! - `j`/`k`/arrows: move, `Space`/`Enter`: toggle row
//! - digits, `,` and `.`: type into the focused price bound
//! - `a`: apply, `r`: reset, `f`/`Esc`: close
//!
//! Product details:
//! - `Enter`/`o`: open the product page, `Esc`/`q`: close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use mercado_busca::catalog::CatalogRequest;
use mercado_busca::{handle_event, Action, Config, Event, Focus};

register_plugin!(State);

struct State {
    app: mercado_busca::AppState,

    /// Program used to open product permalinks.
    open_command: String,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: mercado_busca::initialize(&config),
            open_command: config.open_command,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and state, then asks for
    /// permissions. Nothing is fetched until they are granted.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        mercado_busca::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            api_base = %config.api_base,
            site_id = %config.site_id,
            open_command = %config.open_command,
            "parsed configuration"
        );
        self.app = mercado_busca::initialize(&config);
        self.open_command = config.open_command;

        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::RunCommands,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_response(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => Event::PermissionsGranted,
                PermissionStatus::Denied => Event::PermissionsDenied,
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        mercado_busca::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Recovers the request a web response answers.
    fn map_web_response(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        match CatalogRequest::from_context(context) {
            Ok(request) => {
                tracing::debug!(kind = request.kind(), status, "catalog response received");
                Some(Event::CatalogResponse { request, status, body })
            }
            Err(e) => {
                tracing::warn!(error = %e, status, "dropping web response without a request tag");
                None
            }
        }
    }

    /// Maps keyboard events to application events relative to the focus.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, focus = ?self.app.focus, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match key.bare_key {
            BareKey::Down => return Some(Event::KeyDown),
            BareKey::Up => return Some(Event::KeyUp),
            BareKey::Esc => return Some(Event::Escape),
            _ => {}
        }

        Some(match self.app.focus {
            Focus::SearchInput | Focus::CategoryPicker => match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            Focus::Results => match key.bare_key {
                BareKey::Char('j') => Event::KeyDown,
                BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter => Event::Submit,
                BareKey::Char('/') => Event::EditSearch,
                BareKey::Char('c') => Event::OpenCategoryPicker,
                BareKey::Char('s') => Event::CycleSort,
                BareKey::Char('f') => Event::ToggleFilters,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            },
            Focus::Filters => match key.bare_key {
                BareKey::Char('j') => Event::KeyDown,
                BareKey::Char('k') => Event::KeyUp,
                BareKey::Char(' ') => Event::Toggle,
                BareKey::Enter => Event::Submit,
                BareKey::Char('a') => Event::ApplyFilters,
                BareKey::Char('r') => Event::ResetFilters,
                BareKey::Char('f') => Event::ToggleFilters,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            Focus::Detail => match key.bare_key {
                BareKey::Enter | BareKey::Char('o') => Event::OpenPermalink,
                BareKey::Char('q') => Event::Escape,
                _ => return None,
            },
        })
    }

    /// Executes an action returned by the library.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch { url, request } => {
                let context = match request.to_context() {
                    Ok(context) => context,
                    Err(e) => {
                        tracing::warn!(error = %e, kind = request.kind(), "failed to tag request, not sending");
                        return;
                    }
                };
                let mut headers = BTreeMap::new();
                headers.insert("Accept".to_string(), "application/json".to_string());

                tracing::debug!(kind = request.kind(), url = %url, "issuing catalog request");
                web_request(url, HttpVerb::Get, headers, vec![], context);
            }
            Action::OpenUrl { url } => {
                tracing::debug!(url = %url, command = %self.open_command, "opening url");
                run_command(&[self.open_command.as_str(), url.as_str()], BTreeMap::new());
            }
        }
    }
}
