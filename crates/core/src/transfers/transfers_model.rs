//! Transfer ledger domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::clubs::Club;

/// Sale proceeds as a percentage of catalog value (fixed 20% depreciation).
pub const SALE_RATE_PERCENT: i64 = 80;

/// Minimum accepted negotiated offer as a percentage of catalog value.
pub const MIN_OFFER_PERCENT: i64 = 80;

/// Proceeds of selling a player: `floor(value * 0.8)`.
pub fn sale_value(value: i64) -> i64 {
    value * SALE_RATE_PERCENT / 100
}

/// Lowest negotiated price a seller accepts: `floor(value * 0.8)`.
pub fn minimum_offer(value: i64) -> i64 {
    value * MIN_OFFER_PERCENT / 100
}

/// Kind of an economy operation recorded in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferKind {
    Purchase,
    Sale,
    Loan,
    Training,
}

impl TransferKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferKind::Purchase => "PURCHASE",
            TransferKind::Sale => "SALE",
            TransferKind::Loan => "LOAN",
            TransferKind::Training => "TRAINING",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PURCHASE" => Some(TransferKind::Purchase),
            "SALE" => Some(TransferKind::Sale),
            "LOAN" => Some(TransferKind::Loan),
            "TRAINING" => Some(TransferKind::Training),
            _ => None,
        }
    }
}

/// An immutable ledger entry. Append-only: no update or delete path exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub id: String,
    pub user_id: String,
    pub club_id: String,
    pub kind: TransferKind,
    /// Snapshot of the player's name at transaction time.
    pub player_name: String,
    pub player_id: Option<String>,
    pub amount: i64,
    pub details: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Result of a successful economy operation: the club after the mutation
/// and the ledger entry that was appended for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOutcome {
    pub club: Club,
    pub record: TransferRecord,
}
