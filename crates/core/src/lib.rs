//! Touchline Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Touchline.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod clubs;
pub mod errors;
pub mod players;
pub mod transfers;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
