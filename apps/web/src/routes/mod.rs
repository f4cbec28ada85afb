use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::state::AppState;
use crate::views::PageTemplate;

/// GET /
async fn page_handler(State(state): State<AppState>) -> Response {
    let snapshot = state.renderer.snapshot();
    PageTemplate::new(&snapshot, &state.site).into_response()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .with_state(state)
}
