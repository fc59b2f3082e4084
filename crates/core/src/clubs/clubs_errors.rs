use thiserror::Error;

/// Business-rule failures for club ledger operations.
#[derive(Error, Debug)]
pub enum ClubError {
    #[error("club name '{0}' is already taken")]
    NameTaken(String),

    #[error("player is already on the watchlist")]
    AlreadyWatched,

    #[error("club has no players to field")]
    EmptyRoster,
}
