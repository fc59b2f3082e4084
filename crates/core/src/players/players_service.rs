use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::players_model::{NewPlayer, Player};
use super::players_traits::{PlayerRepositoryTrait, PlayerServiceTrait};
use crate::clubs::ClubRepositoryTrait;
use crate::{Error, Result};

/// Service for the shared player catalog.
pub struct PlayerService {
    player_repository: Arc<dyn PlayerRepositoryTrait>,
    club_repository: Arc<dyn ClubRepositoryTrait>,
}

impl PlayerService {
    /// Creates a new PlayerService instance with injected dependencies
    pub fn new(
        player_repository: Arc<dyn PlayerRepositoryTrait>,
        club_repository: Arc<dyn ClubRepositoryTrait>,
    ) -> Self {
        Self {
            player_repository,
            club_repository,
        }
    }
}

#[async_trait::async_trait]
impl PlayerServiceTrait for PlayerService {
    fn list_market(&self, user_id: &str) -> Result<Vec<Player>> {
        // Callers without a club yet see the whole catalog.
        match self.club_repository.find_by_user(user_id)? {
            Some(club) => self.player_repository.list_market(&club.id),
            None => self.player_repository.list_all(),
        }
    }

    fn list_all(&self) -> Result<Vec<Player>> {
        self.player_repository.list_all()
    }

    async fn create_player(&self, new_player: NewPlayer) -> Result<Player> {
        new_player.validate()?;
        let new_player = new_player.clamped();

        if self
            .player_repository
            .find_by_name(new_player.name.trim())?
            .is_some()
        {
            return Err(Error::Duplicate("player name already exists".to_string()));
        }

        let now = Utc::now().naive_utc();
        let player = Player {
            id: Uuid::new_v4().to_string(),
            name: new_player.name.trim().to_string(),
            position: new_player.position,
            rating: new_player.rating,
            value: new_player.value,
            club_id: None,
            on_loan: false,
            created_at: now,
            updated_at: now,
        };
        self.player_repository.create(player).await
    }
}
