use chrono::Utc;
use dashmap::DashMap;
use log::debug;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::transfers_errors::TransferError;
use super::transfers_model::{minimum_offer, sale_value, TransferKind, TransferOutcome, TransferRecord};
use super::transfers_traits::{TransferRepositoryTrait, TransferServiceTrait};
use crate::clubs::{Club, ClubRepositoryTrait};
use crate::players::{Player, PlayerRepositoryTrait};
use crate::{errors::ValidationError, Error, Result};

/// The transfer engine: validates and applies buy/sell/loan/train
/// operations against the club ledger and the player catalog.
///
/// Mutations are serialized per club through a lock registry, so at most
/// one economic mutation per club is in progress at any time. The
/// repository then applies each mutation atomically and re-checks the
/// guards, which also covers cross-club races over the same player.
pub struct TransferService {
    club_repository: Arc<dyn ClubRepositoryTrait>,
    player_repository: Arc<dyn PlayerRepositoryTrait>,
    transfer_repository: Arc<dyn TransferRepositoryTrait>,
    club_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl TransferService {
    /// Creates a new TransferService instance with injected dependencies
    pub fn new(
        club_repository: Arc<dyn ClubRepositoryTrait>,
        player_repository: Arc<dyn PlayerRepositoryTrait>,
        transfer_repository: Arc<dyn TransferRepositoryTrait>,
    ) -> Self {
        Self {
            club_repository,
            player_repository,
            transfer_repository,
            club_locks: DashMap::new(),
        }
    }

    fn club_lock(&self, club_id: &str) -> Arc<Mutex<()>> {
        self.club_locks
            .entry(club_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    fn require_club(&self, user_id: &str) -> Result<Club> {
        self.club_repository
            .find_by_user(user_id)?
            .ok_or_else(|| Error::NotFound("club".to_string()))
    }

    fn check_budget(club: &Club, required: i64) -> Result<()> {
        if club.budget < required {
            return Err(TransferError::InsufficientBudget {
                required,
                available: club.budget,
            }
            .into());
        }
        Ok(())
    }

    fn ledger_entry(
        club: &Club,
        player: &Player,
        kind: TransferKind,
        amount: i64,
        details: Option<String>,
    ) -> TransferRecord {
        TransferRecord {
            id: Uuid::new_v4().to_string(),
            user_id: club.user_id.clone(),
            club_id: club.id.clone(),
            kind,
            player_name: player.name.clone(),
            player_id: Some(player.id.clone()),
            amount,
            details,
            created_at: Utc::now().naive_utc(),
        }
    }
}

#[async_trait::async_trait]
impl TransferServiceTrait for TransferService {
    async fn buy(
        &self,
        user_id: &str,
        player_id: &str,
        negotiated_value: Option<i64>,
    ) -> Result<TransferOutcome> {
        let club = self.require_club(user_id)?;
        let lock = self.club_lock(&club.id);
        let _guard = lock.lock().await;
        // Re-read under the lock so the budget check sees current state.
        let club = self.require_club(user_id)?;

        let player = self.player_repository.find_by_id(player_id)?;
        if player.club_id.as_deref() == Some(club.id.as_str()) {
            return Err(TransferError::AlreadyOwned.into());
        }
        if player.club_id.is_some() {
            return Err(TransferError::OwnedByAnotherClub.into());
        }

        let price = match negotiated_value {
            Some(offered) => {
                let minimum = minimum_offer(player.value);
                if offered < minimum {
                    return Err(TransferError::OfferRejected { offered, minimum }.into());
                }
                offered
            }
            None => player.value,
        };
        Self::check_budget(&club, price)?;

        let record = Self::ledger_entry(&club, &player, TransferKind::Purchase, price, None);
        let outcome = self.transfer_repository.record_purchase(record).await?;
        debug!(
            "Club {} signed player {} for {}",
            outcome.club.id, player_id, price
        );
        Ok(outcome)
    }

    async fn sell(&self, user_id: &str, player_id: &str) -> Result<TransferOutcome> {
        let club = self.require_club(user_id)?;
        let lock = self.club_lock(&club.id);
        let _guard = lock.lock().await;
        let club = self.require_club(user_id)?;

        let player = self.player_repository.find_by_id(player_id)?;
        if player.club_id.as_deref() != Some(club.id.as_str()) {
            return Err(TransferError::NotInRoster.into());
        }

        let proceeds = sale_value(player.value);
        let record = Self::ledger_entry(&club, &player, TransferKind::Sale, proceeds, None);
        self.transfer_repository.record_sale(record).await
    }

    async fn loan(&self, user_id: &str, player_id: &str, fee: i64) -> Result<TransferOutcome> {
        if fee < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Loan fee cannot be negative".to_string(),
            )));
        }
        let club = self.require_club(user_id)?;
        let lock = self.club_lock(&club.id);
        let _guard = lock.lock().await;
        let club = self.require_club(user_id)?;

        let player = self.player_repository.find_by_id(player_id)?;
        if player.on_loan {
            return Err(TransferError::AlreadyOnLoan.into());
        }
        if player.club_id.as_deref() == Some(club.id.as_str()) {
            return Err(TransferError::OwnPlayerLoan.into());
        }
        Self::check_budget(&club, fee)?;

        let record = Self::ledger_entry(&club, &player, TransferKind::Loan, fee, None);
        self.transfer_repository.record_loan(record).await
    }

    async fn train(&self, user_id: &str, player_id: &str, cost: i64) -> Result<TransferOutcome> {
        if cost <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Training cost must be a positive amount".to_string(),
            )));
        }
        let club = self.require_club(user_id)?;
        let lock = self.club_lock(&club.id);
        let _guard = lock.lock().await;
        let club = self.require_club(user_id)?;

        let player = self.player_repository.find_by_id(player_id)?;
        if player.club_id.as_deref() != Some(club.id.as_str()) {
            return Err(TransferError::NotInRoster.into());
        }
        Self::check_budget(&club, cost)?;

        let record = Self::ledger_entry(&club, &player, TransferKind::Training, cost, None);
        self.transfer_repository.record_training(record).await
    }

    fn history(&self, user_id: &str) -> Result<Vec<TransferRecord>> {
        let club = self.require_club(user_id)?;
        self.transfer_repository.list_for_club(&club.id)
    }

    fn history_entry(&self, user_id: &str, record_id: &str) -> Result<TransferRecord> {
        let club = self.require_club(user_id)?;
        // Other clubs' entries look the same as missing ones.
        self.transfer_repository
            .find_for_club(&club.id, record_id)?
            .ok_or_else(|| Error::NotFound("transaction".to_string()))
    }
}
