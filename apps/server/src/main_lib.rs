use std::sync::Arc;

use crate::auth::{Argon2PasswordHasher, JwtTokenIssuer};
use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use touchline_core::{
    clubs::{ClubService, ClubServiceTrait},
    players::{PlayerService, PlayerServiceTrait},
    transfers::{TransferService, TransferServiceTrait},
    users::{UserService, UserServiceTrait},
};
use touchline_storage_sqlite::{
    clubs::ClubRepository, db, players::PlayerRepository, transfers::TransferRepository,
    users::UserRepository,
};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub club_service: Arc<dyn ClubServiceTrait>,
    pub player_service: Arc<dyn PlayerServiceTrait>,
    pub transfer_service: Arc<dyn TransferServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let pool = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);
    let writer = db::spawn_writer(pool.clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let club_repository = Arc::new(ClubRepository::new(pool.clone(), writer.clone()));
    let player_repository = Arc::new(PlayerRepository::new(pool.clone(), writer.clone()));
    let transfer_repository = Arc::new(TransferRepository::new(pool.clone(), writer.clone()));

    let club_service: Arc<ClubService> = Arc::new(ClubService::new(
        club_repository.clone(),
        player_repository.clone(),
    ));

    let hasher = Arc::new(Argon2PasswordHasher);
    let tokens = Arc::new(JwtTokenIssuer::new(
        &config.jwt_secret,
        config.token_ttl_secs,
    ));
    let user_service = Arc::new(
        UserService::new(user_repository, hasher, tokens)
            .with_club_service(club_service.clone() as Arc<dyn ClubServiceTrait>),
    );

    let player_service = Arc::new(PlayerService::new(
        player_repository.clone(),
        club_repository.clone(),
    ));

    let transfer_service = Arc::new(TransferService::new(
        club_repository,
        player_repository,
        transfer_repository,
    ));

    Ok(Arc::new(AppState {
        user_service,
        club_service,
        player_service,
        transfer_service,
    }))
}
