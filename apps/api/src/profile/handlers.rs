use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::state::AppState;

/// GET /api/users/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    let profile = state.provider.profile().await?;
    Ok(Json(profile))
}
