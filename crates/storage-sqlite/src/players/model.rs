//! Database models for players.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use touchline_core::players::{Player, Position};
use touchline_core::{Error, Result};

/// Database model for players
#[derive(Queryable, Insertable, Identifiable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::players)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlayerDB {
    pub id: String,
    pub name: String,
    pub position: String,
    pub rating: i32,
    pub value: i64,
    pub club_id: Option<String>,
    pub on_loan: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<PlayerDB> for Player {
    type Error = Error;

    fn try_from(db: PlayerDB) -> Result<Self> {
        Ok(Self {
            id: db.id,
            name: db.name,
            position: Position::parse(&db.position)?,
            rating: db.rating,
            value: db.value,
            club_id: db.club_id,
            on_loan: db.on_loan,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<Player> for PlayerDB {
    fn from(domain: Player) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            position: domain.position.as_str().to_string(),
            rating: domain.rating,
            value: domain.value,
            club_id: domain.club_id,
            on_loan: domain.on_loan,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
