//! SQLite storage implementation for the transfer ledger.

mod model;
mod repository;

pub use model::TransferRecordDB;
pub use repository::TransferRepository;
