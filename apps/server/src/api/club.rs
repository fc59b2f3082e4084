use std::sync::Arc;

use crate::{
    auth::AuthUser,
    error::ApiResult,
    main_lib::AppState,
    models::{SimulateRequest, TrainRequest},
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use touchline_core::clubs::{ClubProfileUpdate, ClubSummary};
use touchline_core::transfers::TransferOutcome;

async fn get_club(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<ClubSummary>> {
    let summary = state.club_service.get_club_summary(&user_id).await?;
    Ok(Json(summary))
}

async fn update_club(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(update): Json<ClubProfileUpdate>,
) -> ApiResult<Json<ClubSummary>> {
    let summary = state.club_service.update_profile(&user_id, update).await?;
    Ok(Json(summary))
}

async fn train(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<TrainRequest>,
) -> ApiResult<Json<TransferOutcome>> {
    let outcome = state
        .transfer_service
        .train(&user_id, &request.player_id, request.cost)
        .await?;
    Ok(Json(outcome))
}

async fn simulate(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<SimulateRequest>,
) -> ApiResult<Json<ClubSummary>> {
    let summary = state
        .club_service
        .simulate_match(&user_id, request.win)
        .await?;
    Ok(Json(summary))
}

async fn reset(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<ClubSummary>> {
    let summary = state.club_service.reset_club(&user_id).await?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/club/me", get(get_club).put(update_club))
        .route("/club/me/train", post(train))
        .route("/club/me/simulate", post(simulate))
        .route("/club/me/reset", post(reset))
}
