//! Clubs module - the club ledger, match simulation, and the leaderboard.

mod clubs_constants;
mod clubs_errors;
mod clubs_model;
mod clubs_service;
mod clubs_traits;


// Re-export the public interface
pub use clubs_constants::*;
pub use clubs_errors::ClubError;
pub use clubs_model::{
    Club, ClubProfileUpdate, ClubSummary, LeaderboardEntry, WatchlistEntry,
};
pub use clubs_service::ClubService;
pub use clubs_traits::{ClubRepositoryTrait, ClubServiceTrait};
