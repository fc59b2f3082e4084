use std::sync::Arc;

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState, models::LoginRequest};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use touchline_core::users::{AuthSession, NewUser, UserProfile};

async fn register(
    State(state): State<Arc<AppState>>,
    Json(new_user): Json<NewUser>,
) -> ApiResult<Json<AuthSession>> {
    let session = state.user_service.register(new_user).await?;
    Ok(Json(session))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<AuthSession>> {
    let session = state
        .user_service
        .login(&request.email, &request.password)
        .await?;
    Ok(Json(session))
}

async fn me(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<UserProfile>> {
    let profile = state.user_service.get_profile(&user_id)?;
    Ok(Json(profile))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
}
