use std::sync::Arc;

use crate::renderer::ProfileRenderer;
use crate::views::Site;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Mounted once at startup; every page render reads its current snapshot.
    pub renderer: ProfileRenderer,
    pub site: Arc<Site>,
}
