use std::sync::Arc;

use crate::profile::ProfileProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Source of the profile document. Default: StaticProfileProvider.
    pub provider: Arc<dyn ProfileProvider>,
}
