//! Player domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Maximum player rating; training caps at this value.
pub const MAX_PLAYER_RATING: i32 = 99;

/// Field position of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Forward => "FORWARD",
            Position::Midfielder => "MIDFIELDER",
            Position::Defender => "DEFENDER",
            Position::Goalkeeper => "GOALKEEPER",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "FORWARD" => Ok(Position::Forward),
            "MIDFIELDER" => Ok(Position::Midfielder),
            "DEFENDER" => Ok(Position::Defender),
            "GOALKEEPER" => Ok(Position::Goalkeeper),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown position '{other}'"
            )))),
        }
    }
}

/// Domain model representing a player in the shared catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    /// Rating in [0, 99]. Only changes through training.
    pub rating: i32,
    /// Market value in whole currency units, never negative.
    pub value: i64,
    /// Back-reference to the owning club, if any. A player is on at most
    /// one roster at a time.
    pub club_id: Option<String>,
    pub on_loan: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Player {
    /// Suggested training cost: 10% of the player's current value.
    pub fn suggested_training_cost(&self) -> i64 {
        self.value / 10
    }
}

/// Input model for creating a new catalog player.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub position: Position,
    pub rating: i32,
    pub value: i64,
}

impl NewPlayer {
    /// Validates the new player data.
    pub fn validate(&self) -> Result<()> {
        let name = self.name.trim();
        if name.len() < 3 || name.len() > 50 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Player name must be between 3 and 50 characters".to_string(),
            )));
        }
        Ok(())
    }

    /// Clamps rating into [0, 99] and value into [0, ∞).
    ///
    /// Catalog creation is permissive: out-of-range numbers are clamped
    /// rather than rejected. Runtime training bounds are enforced instead.
    pub fn clamped(mut self) -> Self {
        self.rating = self.rating.clamp(0, MAX_PLAYER_RATING);
        self.value = self.value.max(0);
        self
    }
}
