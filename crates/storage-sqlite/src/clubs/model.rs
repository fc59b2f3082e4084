//! Database models for clubs and watchlist entries.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use touchline_core::clubs::{Club, WatchlistEntry};

/// Database model for clubs
#[derive(Queryable, Insertable, Identifiable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::clubs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ClubDB {
    pub id: String,
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

/// Database model for watchlist entries
#[derive(Queryable, Insertable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::watchlist)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WatchlistEntryDB {
    pub id: String,
    pub club_id: String,
    pub player_id: String,
    pub player_name: String,
    pub player_value: i64,
    pub created_at: NaiveDateTime,
}

// Conversion to and from the domain models
impl From<ClubDB> for Club {
    fn from(db: ClubDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            budget: db.budget,
            wins: db.wins,
            season_wins: db.season_wins,
            games_played: db.games_played,
            color: db.color,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Club> for ClubDB {
    fn from(domain: Club) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            name: domain.name,
            budget: domain.budget,
            wins: domain.wins,
            season_wins: domain.season_wins,
            games_played: domain.games_played,
            color: domain.color,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}

impl From<WatchlistEntryDB> for WatchlistEntry {
    fn from(db: WatchlistEntryDB) -> Self {
        Self {
            id: db.id,
            club_id: db.club_id,
            player_id: db.player_id,
            player_name: db.player_name,
            player_value: db.player_value,
            created_at: db.created_at,
        }
    }
}

impl From<WatchlistEntry> for WatchlistEntryDB {
    fn from(domain: WatchlistEntry) -> Self {
        Self {
            id: domain.id,
            club_id: domain.club_id,
            player_id: domain.player_id,
            player_name: domain.player_name,
            player_value: domain.player_value,
            created_at: domain.created_at,
        }
    }
}
