use thiserror::Error;

/// Business-rule failures for economy operations.
///
/// All of these are detected before any mutation is applied; a failed
/// operation leaves the club, player, and ledger untouched.
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("insufficient budget: need {required}, have {available}")]
    InsufficientBudget { required: i64, available: i64 },

    #[error("player is already on your roster")]
    AlreadyOwned,

    #[error("player is under contract with another club")]
    OwnedByAnotherClub,

    #[error("player is not on your roster")]
    NotInRoster,

    #[error("player is already out on loan")]
    AlreadyOnLoan,

    #[error("cannot take your own player on loan")]
    OwnPlayerLoan,

    #[error("offer of {offered} is below the minimum of {minimum}")]
    OfferRejected { offered: i64, minimum: i64 },
}
