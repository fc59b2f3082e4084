use touchline_core::players::{Player, PlayerRepositoryTrait};
use touchline_core::Result;

use super::model::PlayerDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::players;
use crate::schema::players::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

pub struct PlayerRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl PlayerRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        PlayerRepository { pool, writer }
    }

    fn collect(players_db: Vec<PlayerDB>) -> Result<Vec<Player>> {
        players_db.into_iter().map(Player::try_from).collect()
    }
}

#[async_trait]
impl PlayerRepositoryTrait for PlayerRepository {
    fn find_by_id(&self, player_id: &str) -> Result<Player> {
        let mut conn = get_connection(&self.pool)?;
        let player_db = players
            .find(player_id)
            .first::<PlayerDB>(&mut conn)
            .map_err(StorageError::from)?;
        Player::try_from(player_db)
    }

    fn find_by_name(&self, name_value: &str) -> Result<Option<Player>> {
        let mut conn = get_connection(&self.pool)?;
        let player_db = players
            .filter(name.eq(name_value))
            .first::<PlayerDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        player_db.map(Player::try_from).transpose()
    }

    fn list_all(&self) -> Result<Vec<Player>> {
        let mut conn = get_connection(&self.pool)?;
        let players_db = players
            .order(name.asc())
            .load::<PlayerDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::collect(players_db)
    }

    fn list_by_club(&self, club_id_value: &str) -> Result<Vec<Player>> {
        let mut conn = get_connection(&self.pool)?;
        let players_db = players
            .filter(club_id.eq(club_id_value))
            .order(name.asc())
            .load::<PlayerDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::collect(players_db)
    }

    fn list_market(&self, excluding_club_id: &str) -> Result<Vec<Player>> {
        let mut conn = get_connection(&self.pool)?;
        // Free agents (NULL club) count as available, so the exclusion has
        // to be null-aware.
        let players_db = players
            .filter(club_id.ne(excluding_club_id).or(club_id.is_null()))
            .order(name.asc())
            .load::<PlayerDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::collect(players_db)
    }

    async fn create(&self, player: Player) -> Result<Player> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Player> {
                let player_db = PlayerDB::from(player);
                let result_db = diesel::insert_into(players::table)
                    .values(&player_db)
                    .returning(PlayerDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Player::try_from(result_db)
            })
            .await
    }
}
