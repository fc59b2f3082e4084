use async_trait::async_trait;

use super::users_model::{AuthSession, NewUser, User, UserProfile};
use crate::Result;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn find_by_id(&self, user_id: &str) -> Result<User>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn find_by_platform_id(&self, platform_id: &str) -> Result<Option<User>>;
    async fn create(&self, user: User) -> Result<User>;
}

/// Hashes and verifies passwords. Implemented with argon2 in the server.
pub trait PasswordHasherTrait: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String>;
    /// Returns `Ok(false)` on mismatch; errors are reserved for malformed digests.
    fn verify(&self, plain: &str, digest: &str) -> Result<bool>;
}

/// Signs and verifies bearer tokens. Implemented with jsonwebtoken in the server.
pub trait TokenIssuerTrait: Send + Sync {
    fn sign(&self, user_id: &str) -> Result<String>;
    /// Resolves a token to the user id it was signed for.
    fn verify(&self, token: &str) -> Result<String>;
}

/// Trait for identity service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, new_user: NewUser) -> Result<AuthSession>;
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession>;
    /// Pure token verification; resolves to the authenticated user id.
    fn authenticate(&self, token: &str) -> Result<String>;
    fn get_profile(&self, user_id: &str) -> Result<UserProfile>;
}
