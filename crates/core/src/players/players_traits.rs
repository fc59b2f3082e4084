use async_trait::async_trait;

use super::players_model::{NewPlayer, Player};
use crate::Result;

/// Trait for player repository operations
#[async_trait]
pub trait PlayerRepositoryTrait: Send + Sync {
    fn find_by_id(&self, player_id: &str) -> Result<Player>;
    fn find_by_name(&self, name: &str) -> Result<Option<Player>>;
    fn list_all(&self) -> Result<Vec<Player>>;
    /// The roster of a club: every player whose back-reference points at it.
    fn list_by_club(&self, club_id: &str) -> Result<Vec<Player>>;
    /// The market view: every player not on the given club's roster.
    fn list_market(&self, excluding_club_id: &str) -> Result<Vec<Player>>;
    async fn create(&self, player: Player) -> Result<Player>;
}

/// Trait for player catalog service operations
#[async_trait]
pub trait PlayerServiceTrait: Send + Sync {
    /// Players available to the caller: everyone except their own roster.
    fn list_market(&self, user_id: &str) -> Result<Vec<Player>>;
    /// Unrestricted listing, for administrative and debug use.
    fn list_all(&self) -> Result<Vec<Player>>;
    async fn create_player(&self, new_player: NewPlayer) -> Result<Player>;
}
