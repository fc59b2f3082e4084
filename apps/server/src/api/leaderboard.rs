use std::sync::Arc;

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use touchline_core::clubs::LeaderboardEntry;

async fn leaderboard(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let entries = state.club_service.leaderboard()?;
    Ok(Json(entries))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/leaderboard", get(leaderboard))
}
