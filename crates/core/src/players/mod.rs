//! Players module - the shared player catalog and the market view.

mod players_model;
mod players_service;
mod players_traits;

#[cfg(test)]
mod players_model_tests;

// Re-export the public interface
pub use players_model::{NewPlayer, Player, Position, MAX_PLAYER_RATING};
pub use players_service::PlayerService;
pub use players_traits::{PlayerRepositoryTrait, PlayerServiceTrait};
