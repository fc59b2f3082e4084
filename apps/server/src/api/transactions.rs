use std::sync::Arc;

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use touchline_core::transfers::TransferRecord;

async fn list_transactions(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<Vec<TransferRecord>>> {
    let records = state.transfer_service.history(&user_id)?;
    Ok(Json(records))
}

async fn get_transaction(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(record_id): Path<String>,
) -> ApiResult<Json<TransferRecord>> {
    let record = state.transfer_service.history_entry(&user_id, &record_id)?;
    Ok(Json(record))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions/{id}", get(get_transaction))
}
