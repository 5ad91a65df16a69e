//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (`main.rs`) and the domain and catalog
//! layers. Data flows one way:
//!
//! ```text
//! Key / Web response → Event → handle_event → AppState → Actions → Host calls
//!                                                 │
//!                                                 └→ compute_viewmodel → ui::render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`handler`]: Event processing and focus-relative key semantics
//! - [`modes`]: Keyboard focus
//! - [`orchestrator`]: Search and detail state machines
//! - [`picker`]: Category picker with fuzzy filtering
//! - [`sidebar`]: Filter sidebar rows
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod orchestrator;
pub mod picker;
pub mod sidebar;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::Focus;
pub use orchestrator::{DetailStatus, PendingDetail, SearchFailure, SearchStatus};
pub use state::AppState;
