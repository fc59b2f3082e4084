//! Transfer ledger repository.
//!
//! Every `record_*` method runs as one job on the writer actor, so the
//! guard re-checks, the club and player updates, and the ledger insert
//! happen inside a single immediate transaction. A guard failure rolls
//! the whole mutation back.

use touchline_core::clubs::Club;
use touchline_core::players::MAX_PLAYER_RATING;
use touchline_core::transfers::{
    TransferError, TransferOutcome, TransferRecord, TransferRepositoryTrait,
};
use touchline_core::{Error, Result};

use super::model::TransferRecordDB;
use crate::clubs::ClubDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::players::PlayerDB;
use crate::schema::{clubs, players, transfers};
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

pub struct TransferRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl TransferRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        TransferRepository { pool, writer }
    }

    fn load_club(conn: &mut SqliteConnection, club_id: &str) -> Result<ClubDB> {
        clubs::table
            .find(club_id)
            .first::<ClubDB>(conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| Error::NotFound("club".to_string()))
    }

    fn load_player(conn: &mut SqliteConnection, record: &TransferRecord) -> Result<PlayerDB> {
        let player_id = record
            .player_id
            .as_deref()
            .ok_or_else(|| Error::NotFound("player".to_string()))?;
        players::table
            .find(player_id)
            .first::<PlayerDB>(conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| Error::NotFound("player".to_string()))
    }

    fn check_budget(club: &ClubDB, required: i64) -> Result<()> {
        if club.budget < required {
            return Err(TransferError::InsufficientBudget {
                required,
                available: club.budget,
            }
            .into());
        }
        Ok(())
    }

    fn debit_club(conn: &mut SqliteConnection, club: &ClubDB, amount: i64) -> Result<ClubDB> {
        Ok(diesel::update(clubs::table.find(club.id.as_str()))
            .set((
                clubs::budget.eq(club.budget - amount),
                clubs::updated_at.eq(Utc::now().naive_utc()),
            ))
            .returning(ClubDB::as_returning())
            .get_result(conn)
            .map_err(StorageError::from)?)
    }

    fn append_ledger(
        conn: &mut SqliteConnection,
        record: TransferRecord,
    ) -> Result<TransferRecord> {
        let record_db = TransferRecordDB::from(record);
        let result_db = diesel::insert_into(transfers::table)
            .values(&record_db)
            .returning(TransferRecordDB::as_returning())
            .get_result(conn)
            .map_err(StorageError::from)?;
        TransferRecord::try_from(result_db)
    }
}

#[async_trait]
impl TransferRepositoryTrait for TransferRepository {
    async fn record_purchase(&self, record: TransferRecord) -> Result<TransferOutcome> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<TransferOutcome> {
                    let player = Self::load_player(conn, &record)?;
                    if player.club_id.as_deref() == Some(record.club_id.as_str()) {
                        return Err(TransferError::AlreadyOwned.into());
                    }
                    // Only free agents can be signed; a player claimed by
                    // any club stays claimed until that club sells.
                    if player.club_id.is_some() {
                        return Err(TransferError::OwnedByAnotherClub.into());
                    }
                    let club = Self::load_club(conn, &record.club_id)?;
                    Self::check_budget(&club, record.amount)?;

                    let club = Self::debit_club(conn, &club, record.amount)?;
                    diesel::update(players::table.find(player.id.as_str()))
                        .set((
                            players::club_id.eq(Some(record.club_id.as_str())),
                            players::updated_at.eq(Utc::now().naive_utc()),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;

                    let record = Self::append_ledger(conn, record)?;
                    Ok(TransferOutcome {
                        club: Club::from(club),
                        record,
                    })
                },
            )
            .await
    }

    async fn record_sale(&self, record: TransferRecord) -> Result<TransferOutcome> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<TransferOutcome> {
                    let player = Self::load_player(conn, &record)?;
                    if player.club_id.as_deref() != Some(record.club_id.as_str()) {
                        return Err(TransferError::NotInRoster.into());
                    }
                    let club = Self::load_club(conn, &record.club_id)?;

                    // A sale is a credit: negative debit.
                    let club = Self::debit_club(conn, &club, -record.amount)?;
                    diesel::update(players::table.find(player.id.as_str()))
                        .set((
                            players::club_id.eq(None::<String>),
                            players::updated_at.eq(Utc::now().naive_utc()),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;

                    let record = Self::append_ledger(conn, record)?;
                    Ok(TransferOutcome {
                        club: Club::from(club),
                        record,
                    })
                },
            )
            .await
    }

    async fn record_loan(&self, record: TransferRecord) -> Result<TransferOutcome> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<TransferOutcome> {
                    let player = Self::load_player(conn, &record)?;
                    if player.on_loan {
                        return Err(TransferError::AlreadyOnLoan.into());
                    }
                    if player.club_id.as_deref() == Some(record.club_id.as_str()) {
                        return Err(TransferError::OwnPlayerLoan.into());
                    }
                    let club = Self::load_club(conn, &record.club_id)?;
                    Self::check_budget(&club, record.amount)?;

                    let club = Self::debit_club(conn, &club, record.amount)?;
                    diesel::update(players::table.find(player.id.as_str()))
                        .set((
                            players::on_loan.eq(true),
                            players::updated_at.eq(Utc::now().naive_utc()),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;

                    let record = Self::append_ledger(conn, record)?;
                    Ok(TransferOutcome {
                        club: Club::from(club),
                        record,
                    })
                },
            )
            .await
    }

    async fn record_training(&self, record: TransferRecord) -> Result<TransferOutcome> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<TransferOutcome> {
                    let player = Self::load_player(conn, &record)?;
                    if player.club_id.as_deref() != Some(record.club_id.as_str()) {
                        return Err(TransferError::NotInRoster.into());
                    }
                    let club = Self::load_club(conn, &record.club_id)?;
                    Self::check_budget(&club, record.amount)?;

                    let club = Self::debit_club(conn, &club, record.amount)?;
                    diesel::update(players::table.find(player.id.as_str()))
                        .set((
                            players::rating.eq((player.rating + 1).min(MAX_PLAYER_RATING)),
                            players::value.eq(player.value + record.amount),
                            players::updated_at.eq(Utc::now().naive_utc()),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;

                    let record = Self::append_ledger(conn, record)?;
                    Ok(TransferOutcome {
                        club: Club::from(club),
                        record,
                    })
                },
            )
            .await
    }

    fn list_for_club(&self, club_id: &str) -> Result<Vec<TransferRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let records_db = transfers::table
            .filter(transfers::club_id.eq(club_id))
            .order(transfers::created_at.desc())
            .load::<TransferRecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        records_db.into_iter().map(TransferRecord::try_from).collect()
    }

    fn find_for_club(&self, club_id: &str, record_id: &str) -> Result<Option<TransferRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let record_db = transfers::table
            .filter(transfers::id.eq(record_id))
            .filter(transfers::club_id.eq(club_id))
            .first::<TransferRecordDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        record_db.map(TransferRecord::try_from).transpose()
    }
}
