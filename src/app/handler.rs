//! Event handling and state transition logic.
//!
//! The plugin shim translates host events (key presses, permission results,
//! web responses) into [`Event`]s. [`handle_event`] applies each one to
//! [`AppState`] and returns whether to re-render plus the [`Action`]s to
//! execute.
//!
//! Keyboard events are interpreted relative to the current
//! [`Focus`]: `Submit` searches from the search box, opens
//! details from the result list, picks a category in the picker, toggles a
//! row in the sidebar and follows the permalink in the detail modal.

use super::modes::Focus;
use super::orchestrator::DetailStatus;
use super::sidebar::is_price_char;
use crate::app::{Action, AppState};
use crate::catalog::{decode, CatalogRequest, TraceContext};
use crate::domain::Result;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Events fed to the application by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor of the focused list down.
    KeyDown,
    /// Moves the cursor of the focused list up.
    KeyUp,
    /// Printable character for the focused text input.
    Char(char),
    /// Deletes the last character of the focused text input.
    Backspace,
    /// Enter key.
    Submit,
    /// Esc key. Leaves the focused region.
    Escape,
    /// Space in the sidebar.
    Toggle,

    /// Starts editing the search term.
    EditSearch,
    OpenCategoryPicker,
    /// Advances the sort mode. Takes effect on the next search.
    CycleSort,
    /// Opens or closes the filter sidebar.
    ToggleFilters,
    /// Searches with the current filters and closes the sidebar.
    ApplyFilters,
    /// Clears every filter and searches again.
    ResetFilters,
    /// Opens the detail item's page in the browser.
    OpenPermalink,
    /// Hides the plugin.
    CloseFocus,

    /// The host granted the requested permissions.
    PermissionsGranted,
    PermissionsDenied,

    /// A catalog fetch completed.
    CatalogResponse {
        request: CatalogRequest,
        status: u16,
        body: Vec<u8>,
    },
}

impl Event {
    /// Short name for spans and logs. Response bodies are never logged.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::KeyDown => "KeyDown",
            Self::KeyUp => "KeyUp",
            Self::Char(_) => "Char",
            Self::Backspace => "Backspace",
            Self::Submit => "Submit",
            Self::Escape => "Escape",
            Self::Toggle => "Toggle",
            Self::EditSearch => "EditSearch",
            Self::OpenCategoryPicker => "OpenCategoryPicker",
            Self::CycleSort => "CycleSort",
            Self::ToggleFilters => "ToggleFilters",
            Self::ApplyFilters => "ApplyFilters",
            Self::ResetFilters => "ResetFilters",
            Self::OpenPermalink => "OpenPermalink",
            Self::CloseFocus => "CloseFocus",
            Self::PermissionsGranted => "PermissionsGranted",
            Self::PermissionsDenied => "PermissionsDenied",
            Self::CatalogResponse { .. } => "CatalogResponse",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the UI should re-render.
///
/// # Errors
///
/// Currently every failure is absorbed into state (error banners); the
/// `Result` is kept so the shim has one error path for future fallible events.
///
/// # Example
///
/// ```
/// use mercado_busca::app::{handle_event, Action, AppState, Event};
/// use mercado_busca::catalog::CatalogEndpoints;
/// use mercado_busca::ui::Theme;
///
/// let mut state = AppState::new(Theme::default(), CatalogEndpoints::default());
/// state.search_term = "notebook".to_string();
///
/// let (_, actions) = handle_event(&mut state, &Event::ApplyFilters)?;
/// assert!(matches!(&actions[..], [Action::Fetch { .. }]));
/// # Ok::<(), mercado_busca::BuscaError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    if let Event::CatalogResponse { request, status, body } = event {
        return Ok(handle_response(state, request, *status, body));
    }

    let _span = tracing::debug_span!("handle_event", event_type = event.name(), focus = ?state.focus).entered();

    Ok(match event {
        Event::KeyDown => move_cursor(state, true),
        Event::KeyUp => move_cursor(state, false),
        Event::Char(c) => type_char(state, *c),
        Event::Backspace => delete_char(state),
        Event::Submit => submit(state),
        Event::Escape => escape(state),
        Event::Toggle => {
            if state.focus == Focus::Filters {
                toggle_sidebar_row(state)
            } else {
                (false, vec![])
            }
        }
        Event::EditSearch => {
            state.focus = Focus::SearchInput;
            (true, vec![])
        }
        Event::OpenCategoryPicker => {
            state.picker = super::picker::CategoryPicker::default();
            state.focus = Focus::CategoryPicker;
            (true, vec![])
        }
        Event::CycleSort => {
            state.sort = state.sort.next();
            tracing::debug!(sort = ?state.sort, "sort changed");
            (true, vec![])
        }
        Event::ToggleFilters => {
            state.sidebar_open = !state.sidebar_open;
            if state.sidebar_open {
                state.clamp_sidebar_cursor();
                state.focus = Focus::Filters;
            } else if state.focus == Focus::Filters {
                state.focus = Focus::Results;
            }
            (true, vec![])
        }
        Event::ApplyFilters => match state.begin_search() {
            Some(fetch) => {
                state.sidebar_open = false;
                state.focus = Focus::Results;
                (true, vec![fetch])
            }
            None => (false, vec![]),
        },
        Event::ResetFilters => {
            tracing::debug!("resetting filters");
            state.filters.reset();
            state.clamp_sidebar_cursor();
            (true, state.begin_search().into_iter().collect())
        }
        Event::OpenPermalink => open_permalink(state),
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::PermissionsGranted => {
            tracing::debug!("permissions granted, loading categories");
            (
                false,
                vec![Action::fetch(&state.endpoints, CatalogRequest::categories())],
            )
        }
        Event::PermissionsDenied => {
            tracing::debug!("permissions denied, catalog unavailable");
            (false, vec![])
        }
        Event::CatalogResponse { .. } => (false, vec![]),
    })
}

/// Decodes a response and hands it to the state machines.
///
/// The span is parented onto the span that issued the request, which lives
/// in an earlier plugin update.
fn handle_response(state: &mut AppState, request: &CatalogRequest, status: u16, body: &[u8]) -> (bool, Vec<Action>) {
    let span = tracing::debug_span!(
        "handle_catalog_response",
        kind = request.kind(),
        status,
        body_len = body.len()
    );
    if let Some(remote) = request.trace_context().and_then(TraceContext::remote_context) {
        span.set_parent(remote);
    }
    let _span = span.entered();

    let outcome = decode(request, status, body);
    (state.apply_response(request, outcome), vec![])
}

fn move_cursor(state: &mut AppState, down: bool) -> (bool, Vec<Action>) {
    match state.focus {
        Focus::Results => {
            if down {
                state.move_selection_down();
            } else {
                state.move_selection_up();
            }
        }
        Focus::Filters => state.move_sidebar_cursor(down),
        Focus::CategoryPicker => {
            let len = state.picker.entries(&state.categories).len();
            if down {
                state.picker.move_down(len);
            } else {
                state.picker.move_up(len);
            }
        }
        Focus::SearchInput | Focus::Detail => return (false, vec![]),
    }
    (true, vec![])
}

fn type_char(state: &mut AppState, c: char) -> (bool, Vec<Action>) {
    match state.focus {
        Focus::SearchInput => state.search_term.push(c),
        Focus::CategoryPicker => state.picker.push(c),
        Focus::Filters if is_price_char(c) => {
            let Some(bound) = state.sidebar_row().and_then(|row| row.price_bound()) else {
                return (false, vec![]);
            };
            let mut value = state.filters.price_bound(bound).to_string();
            value.push(c);
            state.filters.set_price_bound(bound, value);
        }
        _ => return (false, vec![]),
    }
    tracing::trace!(char = %c, "typed");
    (true, vec![])
}

fn delete_char(state: &mut AppState) -> (bool, Vec<Action>) {
    match state.focus {
        Focus::SearchInput => {
            state.search_term.pop();
        }
        Focus::CategoryPicker => state.picker.pop(),
        Focus::Filters => {
            let Some(bound) = state.sidebar_row().and_then(|row| row.price_bound()) else {
                return (false, vec![]);
            };
            let mut value = state.filters.price_bound(bound).to_string();
            value.pop();
            state.filters.set_price_bound(bound, value);
        }
        Focus::Results | Focus::Detail => return (false, vec![]),
    }
    (true, vec![])
}

fn submit(state: &mut AppState) -> (bool, Vec<Action>) {
    match state.focus {
        Focus::SearchInput => match state.begin_search() {
            Some(fetch) => {
                state.focus = Focus::Results;
                (true, vec![fetch])
            }
            None => (false, vec![]),
        },
        Focus::Results => {
            let actions = state.begin_detail();
            (!actions.is_empty(), actions)
        }
        Focus::CategoryPicker => {
            let entries = state.picker.entries(&state.categories);
            if let Some(entry) = entries.into_iter().nth(state.picker.selected_index) {
                tracing::debug!(category = ?entry.id, "category picked");
                state.category = entry.id;
            }
            state.focus = Focus::Results;
            (true, vec![])
        }
        Focus::Filters => toggle_sidebar_row(state),
        Focus::Detail => open_permalink(state),
    }
}

fn escape(state: &mut AppState) -> (bool, Vec<Action>) {
    match state.focus {
        Focus::SearchInput | Focus::CategoryPicker => state.focus = Focus::Results,
        Focus::Filters => {
            state.sidebar_open = false;
            state.focus = Focus::Results;
        }
        Focus::Detail => state.close_detail(),
        Focus::Results => {
            if state.detail == DetailStatus::Error {
                state.detail = DetailStatus::Idle;
            } else {
                return (false, vec![]);
            }
        }
    }
    (true, vec![])
}

fn toggle_sidebar_row(state: &mut AppState) -> (bool, Vec<Action>) {
    let Some(row) = state.sidebar_row() else {
        return (false, vec![]);
    };
    row.toggle(&mut state.filters);
    state.clamp_sidebar_cursor();
    (true, vec![])
}

fn open_permalink(state: &AppState) -> (bool, Vec<Action>) {
    match &state.detail {
        DetailStatus::Open { item, .. } if !item.permalink.is_empty() => {
            tracing::debug!(permalink = %item.permalink, "opening product page");
            (
                false,
                vec![Action::OpenUrl {
                    url: item.permalink.clone(),
                }],
            )
        }
        _ => (false, vec![]),
    }
}
