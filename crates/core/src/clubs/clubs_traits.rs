use async_trait::async_trait;

use super::clubs_model::{Club, ClubProfileUpdate, ClubSummary, LeaderboardEntry, WatchlistEntry};
use crate::Result;

/// Trait for club repository operations
#[async_trait]
pub trait ClubRepositoryTrait: Send + Sync {
    fn find_by_id(&self, club_id: &str) -> Result<Club>;
    fn find_by_user(&self, user_id: &str) -> Result<Option<Club>>;
    fn find_by_name(&self, name: &str) -> Result<Option<Club>>;
    fn list_all(&self) -> Result<Vec<Club>>;
    async fn create(&self, club: Club) -> Result<Club>;
    async fn update_profile(&self, club_id: &str, update: ClubProfileUpdate) -> Result<Club>;
    /// Restores defaults and, in the same transaction, releases the roster,
    /// empties the watchlist, and deletes the transfer ledger.
    async fn reset(&self, club_id: &str) -> Result<Club>;
    /// Applies a simulated match outcome: always bumps games played; on a win
    /// also bumps the win counters and credits the reward.
    async fn apply_match_result(&self, club_id: &str, win: bool, reward: i64) -> Result<Club>;

    fn watchlist_for_club(&self, club_id: &str) -> Result<Vec<WatchlistEntry>>;
    async fn add_watchlist_entry(&self, entry: WatchlistEntry) -> Result<WatchlistEntry>;
    /// Returns the number of removed entries (0 when the player was not watched).
    async fn remove_watchlist_entry(&self, club_id: &str, player_id: &str) -> Result<usize>;
}

/// Trait for club service operations
#[async_trait]
pub trait ClubServiceTrait: Send + Sync {
    /// Returns the user's club, creating one with defaults if none exists.
    /// Idempotent.
    async fn get_or_create_club(&self, user_id: &str) -> Result<Club>;
    async fn get_club_summary(&self, user_id: &str) -> Result<ClubSummary>;
    async fn update_profile(&self, user_id: &str, update: ClubProfileUpdate)
        -> Result<ClubSummary>;
    async fn reset_club(&self, user_id: &str) -> Result<ClubSummary>;
    async fn add_to_watchlist(&self, user_id: &str, player_id: &str) -> Result<ClubSummary>;
    async fn remove_from_watchlist(&self, user_id: &str, player_id: &str) -> Result<ClubSummary>;
    async fn simulate_match(&self, user_id: &str, win: bool) -> Result<ClubSummary>;
    /// All clubs ranked by wins, ties broken by fewer games played.
    /// Recomputed on every call.
    fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>>;
}
