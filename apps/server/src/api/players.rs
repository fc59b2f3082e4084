use std::sync::Arc;

use crate::{
    auth::AuthUser,
    error::ApiResult,
    main_lib::AppState,
    models::{BuyRequest, LoanRequest, PlayerIdRequest},
};
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use touchline_core::clubs::ClubSummary;
use touchline_core::players::{NewPlayer, Player};
use touchline_core::transfers::TransferOutcome;

async fn list_market(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<Vec<Player>>> {
    let players = state.player_service.list_market(&user_id)?;
    Ok(Json(players))
}

async fn list_all(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
) -> ApiResult<Json<Vec<Player>>> {
    let players = state.player_service.list_all()?;
    Ok(Json(players))
}

async fn create_player(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Json(new_player): Json<NewPlayer>,
) -> ApiResult<Json<Player>> {
    let player = state.player_service.create_player(new_player).await?;
    Ok(Json(player))
}

async fn buy(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<BuyRequest>,
) -> ApiResult<Json<TransferOutcome>> {
    let outcome = state
        .transfer_service
        .buy(&user_id, &request.player_id, request.negotiated_value)
        .await?;
    Ok(Json(outcome))
}

async fn sell(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<PlayerIdRequest>,
) -> ApiResult<Json<TransferOutcome>> {
    let outcome = state
        .transfer_service
        .sell(&user_id, &request.player_id)
        .await?;
    Ok(Json(outcome))
}

async fn loan(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<LoanRequest>,
) -> ApiResult<Json<TransferOutcome>> {
    let outcome = state
        .transfer_service
        .loan(&user_id, &request.player_id, request.fee)
        .await?;
    Ok(Json(outcome))
}

async fn add_to_watchlist(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<PlayerIdRequest>,
) -> ApiResult<Json<ClubSummary>> {
    let summary = state
        .club_service
        .add_to_watchlist(&user_id, &request.player_id)
        .await?;
    Ok(Json(summary))
}

async fn remove_from_watchlist(
    Path(player_id): Path<String>,
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<ClubSummary>> {
    let summary = state
        .club_service
        .remove_from_watchlist(&user_id, &player_id)
        .await?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/players", get(list_market).post(create_player))
        .route("/players/all", get(list_all))
        .route("/players/buy", post(buy))
        .route("/players/sell", post(sell))
        .route("/players/loan", post(loan))
        .route("/players/watchlist", post(add_to_watchlist))
        .route("/players/watchlist/{id}", delete(remove_from_watchlist))
}
