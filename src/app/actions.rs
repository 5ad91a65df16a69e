//! Side effects requested by the event handler.
//!
//! The handler never talks to the host directly. It returns a batch of
//! [`Action`]s and the plugin shim executes them in order. A batch may hold
//! several fetches; the detail view issues its item and seller fetches in one
//! batch so they run concurrently.

use crate::catalog::CatalogRequest;

/// Commands executed by the plugin shim after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues an HTTP `GET` for `url`, tagged with `request`.
    ///
    /// The response comes back as an `Event::CatalogResponse` carrying the
    /// same request.
    Fetch {
        url: String,
        request: CatalogRequest,
    },

    /// Opens an external URL with the configured opener command.
    ///
    /// Fire and forget: the outcome is never reported back.
    OpenUrl {
        url: String,
    },
}

impl Action {
    /// Builds a fetch action, resolving the URL from the request.
    #[must_use]
    pub fn fetch(endpoints: &crate::catalog::CatalogEndpoints, request: CatalogRequest) -> Self {
        Self::Fetch {
            url: endpoints.url_for(&request),
            request,
        }
    }
}
