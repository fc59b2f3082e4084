//! Club domain models.

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::players::Player;
use crate::{errors::ValidationError, Error, Result};

fn color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("color pattern is valid")
    })
}

/// Domain model representing a club in the system.
///
/// The roster is not embedded here; it is the set of players whose
/// `club_id` points at this club.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: String,
    /// Owning user. Immutable after creation; unique per user.
    pub user_id: String,
    pub name: String,
    pub budget: i64,
    pub wins: i32,
    pub season_wins: i32,
    pub games_played: i32,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A watchlist entry holding a snapshot of the player's name and value
/// taken at insertion time. The snapshot is deliberately never refreshed
/// when the live player changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub id: String,
    pub club_id: String,
    pub player_id: String,
    pub player_name: String,
    pub player_value: i64,
    pub created_at: NaiveDateTime,
}

/// The club document returned to clients: the club row plus its roster
/// and watchlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSummary {
    #[serde(flatten)]
    pub club: Club,
    pub roster: Vec<Player>,
    pub watchlist: Vec<WatchlistEntry>,
}

/// Input model for renaming or recoloring a club.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClubProfileUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl ClubProfileUpdate {
    /// Validates the profile update payload.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            let name = name.trim();
            if name.len() < 3 || name.len() > 50 {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Club name must be between 3 and 50 characters".to_string(),
                )));
            }
        }
        if let Some(color) = &self.color {
            if !color_regex().is_match(color) {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Color must be a 3- or 6-digit hex code".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// One row of the leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub club_name: String,
    pub wins: i32,
    pub games_played: i32,
    /// Average rating of the roster; 0 for an empty roster.
    pub average_rating: f64,
}
