use touchline_core::clubs::{
    Club, ClubProfileUpdate, ClubRepositoryTrait, WatchlistEntry, DEFAULT_CLUB_BUDGET,
    DEFAULT_CLUB_COLOR,
};
use touchline_core::Result;

use super::model::{ClubDB, WatchlistEntryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::clubs::dsl::*;
use crate::schema::{clubs, players, transfers, watchlist};
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

pub struct ClubRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl ClubRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        ClubRepository { pool, writer }
    }

    fn load_club(conn: &mut SqliteConnection, club_id_value: &str) -> Result<ClubDB> {
        Ok(clubs::table
            .find(club_id_value)
            .first::<ClubDB>(conn)
            .map_err(StorageError::from)?)
    }
}

#[async_trait]
impl ClubRepositoryTrait for ClubRepository {
    fn find_by_id(&self, club_id_value: &str) -> Result<Club> {
        let mut conn = get_connection(&self.pool)?;
        Ok(Club::from(Self::load_club(&mut conn, club_id_value)?))
    }

    fn find_by_user(&self, user_id_value: &str) -> Result<Option<Club>> {
        let mut conn = get_connection(&self.pool)?;
        let club_db = clubs
            .filter(user_id.eq(user_id_value))
            .first::<ClubDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(club_db.map(Club::from))
    }

    fn find_by_name(&self, name_value: &str) -> Result<Option<Club>> {
        let mut conn = get_connection(&self.pool)?;
        let club_db = clubs
            .filter(name.eq(name_value))
            .first::<ClubDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(club_db.map(Club::from))
    }

    fn list_all(&self) -> Result<Vec<Club>> {
        let mut conn = get_connection(&self.pool)?;
        let clubs_db = clubs
            .load::<ClubDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(clubs_db.into_iter().map(Club::from).collect())
    }

    async fn create(&self, club: Club) -> Result<Club> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Club> {
                let club_db = ClubDB::from(club);
                let result_db = diesel::insert_into(clubs::table)
                    .values(&club_db)
                    .returning(ClubDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Club::from(result_db))
            })
            .await
    }

    async fn update_profile(
        &self,
        club_id_value: &str,
        update: ClubProfileUpdate,
    ) -> Result<Club> {
        let club_id_owned = club_id_value.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Club> {
                let mut club_db = Self::load_club(conn, &club_id_owned)?;
                if let Some(new_name) = update.name {
                    club_db.name = new_name.trim().to_string();
                }
                if let Some(new_color) = update.color {
                    club_db.color = new_color;
                }
                club_db.updated_at = Utc::now().naive_utc();
                let result_db = diesel::update(clubs.find(club_id_owned))
                    .set(&club_db)
                    .returning(ClubDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Club::from(result_db))
            })
            .await
    }

    async fn reset(&self, club_id_value: &str) -> Result<Club> {
        let club_id_owned = club_id_value.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Club> {
                // Release the roster, empty the watchlist, and wipe the
                // ledger together with the counter reset. The club keeps
                // its name.
                diesel::update(players::table.filter(players::club_id.eq(club_id_owned.as_str())))
                    .set(players::club_id.eq(None::<String>))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                diesel::delete(
                    watchlist::table.filter(watchlist::club_id.eq(club_id_owned.as_str())),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                diesel::delete(
                    transfers::table.filter(transfers::club_id.eq(club_id_owned.as_str())),
                )
                .execute(conn)
                .map_err(StorageError::from)?;

                let result_db = diesel::update(clubs.find(club_id_owned.as_str()))
                    .set((
                        budget.eq(DEFAULT_CLUB_BUDGET),
                        wins.eq(0),
                        season_wins.eq(0),
                        games_played.eq(0),
                        color.eq(DEFAULT_CLUB_COLOR),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .returning(ClubDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Club::from(result_db))
            })
            .await
    }

    async fn apply_match_result(
        &self,
        club_id_value: &str,
        win: bool,
        reward: i64,
    ) -> Result<Club> {
        let club_id_owned = club_id_value.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Club> {
                let mut club_db = Self::load_club(conn, &club_id_owned)?;
                club_db.games_played += 1;
                if win {
                    club_db.wins += 1;
                    club_db.season_wins += 1;
                    club_db.budget += reward;
                }
                club_db.updated_at = Utc::now().naive_utc();
                let result_db = diesel::update(clubs.find(club_id_owned))
                    .set(&club_db)
                    .returning(ClubDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Club::from(result_db))
            })
            .await
    }

    fn watchlist_for_club(&self, club_id_value: &str) -> Result<Vec<WatchlistEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let entries_db = watchlist::table
            .filter(watchlist::club_id.eq(club_id_value))
            .order(watchlist::created_at.asc())
            .load::<WatchlistEntryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(entries_db.into_iter().map(WatchlistEntry::from).collect())
    }

    async fn add_watchlist_entry(&self, entry: WatchlistEntry) -> Result<WatchlistEntry> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<WatchlistEntry> {
                    let entry_db = WatchlistEntryDB::from(entry);
                    let result_db = diesel::insert_into(watchlist::table)
                        .values(&entry_db)
                        .returning(WatchlistEntryDB::as_returning())
                        .get_result(conn)
                        .map_err(StorageError::from)?;
                    Ok(WatchlistEntry::from(result_db))
                },
            )
            .await
    }

    async fn remove_watchlist_entry(
        &self,
        club_id_value: &str,
        player_id_value: &str,
    ) -> Result<usize> {
        let club_id_owned = club_id_value.to_string();
        let player_id_owned = player_id_value.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    watchlist::table
                        .filter(watchlist::club_id.eq(club_id_owned))
                        .filter(watchlist::player_id.eq(player_id_owned)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
