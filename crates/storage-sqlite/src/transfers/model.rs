//! Database models for transfer ledger entries.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use touchline_core::transfers::{TransferKind, TransferRecord};
use touchline_core::{Error, Result};

/// Database model for transfer ledger entries
#[derive(Queryable, Insertable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::transfers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransferRecordDB {
    pub id: String,
    pub user_id: String,
    pub club_id: String,
    pub kind: String,
    pub player_name: String,
    pub player_id: Option<String>,
    pub amount: i64,
    pub details: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<TransferRecordDB> for TransferRecord {
    type Error = Error;

    fn try_from(db: TransferRecordDB) -> Result<Self> {
        let kind = TransferKind::parse(&db.kind)
            .ok_or_else(|| Error::Unexpected(format!("unknown transfer kind '{}'", db.kind)))?;
        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            club_id: db.club_id,
            kind,
            player_name: db.player_name,
            player_id: db.player_id,
            amount: db.amount,
            details: db.details,
            created_at: db.created_at,
        })
    }
}

impl From<TransferRecord> for TransferRecordDB {
    fn from(domain: TransferRecord) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            club_id: domain.club_id,
            kind: domain.kind.as_str().to_string(),
            player_name: domain.player_name,
            player_id: domain.player_id,
            amount: domain.amount,
            details: domain.details,
            created_at: domain.created_at,
        }
    }
}
