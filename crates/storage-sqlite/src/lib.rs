//! SQLite storage implementation for Touchline.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `touchline-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. Everything above it is database-agnostic and works with traits.
//!
//! Reads go straight to the pool; every write goes through a single writer
//! actor that applies each job inside one immediate transaction. That is
//! what makes the composite transfer operations atomic.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod clubs;
pub mod players;
pub mod transfers;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from touchline-core for convenience
pub use touchline_core::errors::{DatabaseError, Error, Result};
