use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub mod auth;
pub mod club;
pub mod health;
pub mod leaderboard;
pub mod players;
pub mod transactions;

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(club::router())
        .merge(players::router())
        .merge(transactions::router())
        .merge(leaderboard::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
