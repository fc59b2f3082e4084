//! SQLite storage implementation for clubs and watchlists.

mod model;
mod repository;

pub use model::{ClubDB, WatchlistEntryDB};
pub use repository::ClubRepository;
