use chrono::Utc;
use log::debug;
use std::cmp::Reverse;
use std::sync::Arc;
use uuid::Uuid;

use super::clubs_constants::{DEFAULT_CLUB_BUDGET, DEFAULT_CLUB_COLOR, MATCH_WIN_REWARD};
use super::clubs_errors::ClubError;
use super::clubs_model::{Club, ClubProfileUpdate, ClubSummary, LeaderboardEntry, WatchlistEntry};
use super::clubs_traits::{ClubRepositoryTrait, ClubServiceTrait};
use crate::players::PlayerRepositoryTrait;
use crate::{Error, Result};

/// Service for managing clubs: profile, watchlist, match simulation,
/// and the leaderboard.
pub struct ClubService {
    club_repository: Arc<dyn ClubRepositoryTrait>,
    player_repository: Arc<dyn PlayerRepositoryTrait>,
}

impl ClubService {
    /// Creates a new ClubService instance with injected dependencies
    pub fn new(
        club_repository: Arc<dyn ClubRepositoryTrait>,
        player_repository: Arc<dyn PlayerRepositoryTrait>,
    ) -> Self {
        Self {
            club_repository,
            player_repository,
        }
    }

    fn default_club(user_id: &str) -> Club {
        let now = Utc::now().naive_utc();
        // The club name carries a user-derived suffix to satisfy the unique
        // name constraint until the owner picks a real name.
        let suffix: String = user_id.chars().take(8).collect();
        Club {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: format!("Unnamed Club {suffix}"),
            budget: DEFAULT_CLUB_BUDGET,
            wins: 0,
            season_wins: 0,
            games_played: 0,
            color: DEFAULT_CLUB_COLOR.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn require_club(&self, user_id: &str) -> Result<Club> {
        self.club_repository
            .find_by_user(user_id)?
            .ok_or_else(|| Error::NotFound("club".to_string()))
    }

    fn summarize(&self, club: Club) -> Result<ClubSummary> {
        let roster = self.player_repository.list_by_club(&club.id)?;
        let watchlist = self.club_repository.watchlist_for_club(&club.id)?;
        Ok(ClubSummary {
            club,
            roster,
            watchlist,
        })
    }
}

#[async_trait::async_trait]
impl ClubServiceTrait for ClubService {
    async fn get_or_create_club(&self, user_id: &str) -> Result<Club> {
        if let Some(club) = self.club_repository.find_by_user(user_id)? {
            return Ok(club);
        }
        debug!("Creating default club for user {}", user_id);
        match self.club_repository.create(Self::default_club(user_id)).await {
            Ok(club) => Ok(club),
            // Lost a creation race; the unique user_id index guarantees the
            // winner's club is the one to return.
            Err(Error::Database(_)) | Err(Error::Duplicate(_)) => self
                .club_repository
                .find_by_user(user_id)?
                .ok_or_else(|| Error::NotFound("club".to_string())),
            Err(e) => Err(e),
        }
    }

    async fn get_club_summary(&self, user_id: &str) -> Result<ClubSummary> {
        let club = self.get_or_create_club(user_id).await?;
        self.summarize(club)
    }

    async fn update_profile(
        &self,
        user_id: &str,
        update: ClubProfileUpdate,
    ) -> Result<ClubSummary> {
        update.validate()?;
        let club = self.require_club(user_id)?;

        if let Some(name) = update.name.as_deref() {
            if name != club.name {
                if let Some(other) = self.club_repository.find_by_name(name)? {
                    if other.id != club.id {
                        return Err(ClubError::NameTaken(name.to_string()).into());
                    }
                }
            }
        }

        let updated = self.club_repository.update_profile(&club.id, update).await?;
        self.summarize(updated)
    }

    async fn reset_club(&self, user_id: &str) -> Result<ClubSummary> {
        let club = self.require_club(user_id)?;
        let reset = self.club_repository.reset(&club.id).await?;
        debug!("Reset club {}", reset.id);
        self.summarize(reset)
    }

    async fn add_to_watchlist(&self, user_id: &str, player_id: &str) -> Result<ClubSummary> {
        let club = self.require_club(user_id)?;
        let player = self.player_repository.find_by_id(player_id)?;

        let watchlist = self.club_repository.watchlist_for_club(&club.id)?;
        if watchlist.iter().any(|w| w.player_id == player.id) {
            return Err(ClubError::AlreadyWatched.into());
        }

        // Snapshot of name and value at insertion time; not kept in sync.
        let entry = WatchlistEntry {
            id: Uuid::new_v4().to_string(),
            club_id: club.id.clone(),
            player_id: player.id,
            player_name: player.name,
            player_value: player.value,
            created_at: Utc::now().naive_utc(),
        };
        self.club_repository.add_watchlist_entry(entry).await?;
        self.summarize(club)
    }

    async fn remove_from_watchlist(&self, user_id: &str, player_id: &str) -> Result<ClubSummary> {
        let club = self.require_club(user_id)?;
        let removed = self
            .club_repository
            .remove_watchlist_entry(&club.id, player_id)
            .await?;
        if removed == 0 {
            return Err(Error::NotFound("watchlist entry".to_string()));
        }
        self.summarize(club)
    }

    async fn simulate_match(&self, user_id: &str, win: bool) -> Result<ClubSummary> {
        let club = self.require_club(user_id)?;
        let roster = self.player_repository.list_by_club(&club.id)?;
        if roster.is_empty() {
            return Err(ClubError::EmptyRoster.into());
        }
        let updated = self
            .club_repository
            .apply_match_result(&club.id, win, MATCH_WIN_REWARD)
            .await?;
        self.summarize(updated)
    }

    fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let clubs = self.club_repository.list_all()?;
        let mut entries = Vec::with_capacity(clubs.len());
        for club in clubs {
            let roster = self.player_repository.list_by_club(&club.id)?;
            let average_rating = if roster.is_empty() {
                0.0
            } else {
                let total: i64 = roster.iter().map(|p| i64::from(p.rating)).sum();
                total as f64 / roster.len() as f64
            };
            entries.push(LeaderboardEntry {
                club_name: club.name,
                wins: club.wins,
                games_played: club.games_played,
                average_rating,
            });
        }
        entries.sort_by_key(|e| (Reverse(e.wins), e.games_played));
        Ok(entries)
    }
}
