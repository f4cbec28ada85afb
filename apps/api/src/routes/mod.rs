use axum::{routing::get, Router};

use crate::profile::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/users/profile", get(handlers::handle_get_profile))
        .with_state(state)
}
