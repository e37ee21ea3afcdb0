use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; layouts are computed fresh per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
