use async_trait::async_trait;

use super::transfers_model::{TransferOutcome, TransferRecord};
use crate::Result;

/// Trait for the transfer ledger and the atomic economy mutations.
///
/// Each `record_*` method applies the full read-modify-write for one
/// operation — budget change, roster/flag change, and ledger append — as a
/// single atomic unit, re-checking the business guards against current
/// state. Either every part applies or none does, so the club and player
/// records can never diverge from the ledger.
#[async_trait]
pub trait TransferRepositoryTrait: Send + Sync {
    /// Debit the price, claim a free-agent player for the club, append a
    /// PURCHASE row. A player already claimed by any club is rejected.
    async fn record_purchase(&self, record: TransferRecord) -> Result<TransferOutcome>;
    /// Credit the proceeds, release the player, append a SALE row.
    async fn record_sale(&self, record: TransferRecord) -> Result<TransferOutcome>;
    /// Debit the fee, flag the player as on loan, append a LOAN row.
    async fn record_loan(&self, record: TransferRecord) -> Result<TransferOutcome>;
    /// Debit the cost, raise rating and value, append a TRAINING row.
    async fn record_training(&self, record: TransferRecord) -> Result<TransferOutcome>;
    /// The club's ledger, newest first.
    fn list_for_club(&self, club_id: &str) -> Result<Vec<TransferRecord>>;
    /// One ledger row by id, `None` when it does not exist or belongs to
    /// a different club.
    fn find_for_club(&self, club_id: &str, record_id: &str) -> Result<Option<TransferRecord>>;
}

/// Trait for the transfer engine service operations
#[async_trait]
pub trait TransferServiceTrait: Send + Sync {
    /// Buys a free-agent player at catalog value, or at a negotiated value
    /// of at least 80% of it. Lower offers are rejected, never clamped;
    /// players under contract with another club cannot be bought.
    async fn buy(
        &self,
        user_id: &str,
        player_id: &str,
        negotiated_value: Option<i64>,
    ) -> Result<TransferOutcome>;
    /// Sells a rostered player for `floor(value * 0.8)`.
    async fn sell(&self, user_id: &str, player_id: &str) -> Result<TransferOutcome>;
    /// Takes another club's (or a free) player on loan for a fee.
    async fn loan(&self, user_id: &str, player_id: &str, fee: i64) -> Result<TransferOutcome>;
    /// Spends budget to raise a rostered player's rating by one (capped at
    /// 99) and their value by the amount spent.
    async fn train(&self, user_id: &str, player_id: &str, cost: i64) -> Result<TransferOutcome>;
    /// The caller's transaction history, newest first.
    fn history(&self, user_id: &str) -> Result<Vec<TransferRecord>>;
    /// A single entry of the caller's history; `NotFound` when the entry
    /// does not exist or belongs to another club.
    fn history_entry(&self, user_id: &str, record_id: &str) -> Result<TransferRecord>;
}
