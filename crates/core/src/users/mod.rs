//! Users module - identity, registration, and session tokens.

mod users_errors;
mod users_model;
mod users_service;
mod users_traits;


// Re-export the public interface
pub use users_errors::AuthError;
pub use users_model::{AuthSession, NewUser, User, UserProfile, UserRole, UserStatus};
pub use users_service::UserService;
pub use users_traits::{
    PasswordHasherTrait, TokenIssuerTrait, UserRepositoryTrait, UserServiceTrait,
};
