//! SQLite storage implementation for the player catalog.

mod model;
mod repository;

pub use model::PlayerDB;
pub use repository::PlayerRepository;
