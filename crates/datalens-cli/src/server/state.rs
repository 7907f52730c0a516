//! Application state for the web server.

use datalens::DatasetFacade;

/// How many examples the load endpoint returns.
pub const PREVIEW_LIMIT: usize = 10;

/// Shared application state, built once at startup and handed to route
/// registration.
///
/// The server is stateless per request: the facade reloads the dataset on
/// every call, so there is nothing mutable to share.
#[derive(Clone)]
pub struct AppState {
    /// Facade over the dataset store.
    pub facade: DatasetFacade,
    /// Number of examples returned by the load endpoint.
    pub preview_limit: usize,
}

impl AppState {
    /// Create application state with the default preview limit.
    pub fn new(facade: DatasetFacade) -> Self {
        Self {
            facade,
            preview_limit: PREVIEW_LIMIT,
        }
    }
}
