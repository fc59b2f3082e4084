use thiserror::Error;

/// Authentication failures surfaced by the identity service.
///
/// `InvalidCredentials` deliberately covers both "no such user" and
/// "wrong password" so the two cases cannot be told apart by a caller.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("token has expired")]
    TokenExpired,

    #[error("token is invalid")]
    TokenInvalid,

    #[error("invalid credentials")]
    InvalidCredentials,
}
