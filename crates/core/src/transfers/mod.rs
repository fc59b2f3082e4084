//! Transfers module - the club economy engine.
//!
//! Buy, sell, loan, and training operations mutate a club's budget and
//! roster together with the append-only transfer ledger. Mutations are
//! serialized per club and applied atomically by the storage layer.

mod transfers_errors;
mod transfers_model;
mod transfers_service;
mod transfers_traits;

#[cfg(test)]
mod transfers_service_tests;

// Re-export the public interface
pub use transfers_errors::TransferError;
pub use transfers_model::{
    minimum_offer, sale_value, TransferKind, TransferOutcome, TransferRecord, MIN_OFFER_PERCENT,
    SALE_RATE_PERCENT,
};
pub use transfers_service::TransferService;
pub use transfers_traits::{TransferRepositoryTrait, TransferServiceTrait};
