use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::users_errors::AuthError;
use super::users_model::{AuthSession, NewUser, User, UserProfile, UserRole, UserStatus};
use super::users_traits::{
    PasswordHasherTrait, TokenIssuerTrait, UserRepositoryTrait, UserServiceTrait,
};
use crate::clubs::ClubServiceTrait;
use crate::{Error, Result};

/// Service for registering and authenticating users.
///
/// Password hashing and token signing are injected behind traits so the
/// crate stays free of any particular crypto or JWT implementation.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    hasher: Arc<dyn PasswordHasherTrait>,
    tokens: Arc<dyn TokenIssuerTrait>,
    club_service: Option<Arc<dyn ClubServiceTrait>>,
}

impl UserService {
    /// Creates a new UserService instance with injected dependencies
    pub fn new(
        repository: Arc<dyn UserRepositoryTrait>,
        hasher: Arc<dyn PasswordHasherTrait>,
        tokens: Arc<dyn TokenIssuerTrait>,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
            club_service: None,
        }
    }

    /// Registers a club service so that a default club is created eagerly
    /// at registration time instead of lazily on first access.
    pub fn with_club_service(mut self, club_service: Arc<dyn ClubServiceTrait>) -> Self {
        self.club_service = Some(club_service);
        self
    }

    fn session_for(&self, user: User) -> Result<AuthSession> {
        let token = self.tokens.sign(&user.id)?;
        Ok(AuthSession {
            token,
            user: UserProfile::from(user),
        })
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, new_user: NewUser) -> Result<AuthSession> {
        new_user.validate()?;

        let email = new_user.email.trim().to_lowercase();
        if self.repository.find_by_email(&email)?.is_some() {
            return Err(Error::Duplicate("email is already registered".to_string()));
        }
        let platform_id = new_user.platform_id.trim().to_string();
        if self.repository.find_by_platform_id(&platform_id)?.is_some() {
            return Err(Error::Duplicate(
                "platform id is already registered".to_string(),
            ));
        }

        // Only the hash is ever stored or logged.
        let password_hash = self.hasher.hash(&new_user.password)?;

        let now = Utc::now().naive_utc();
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: new_user.name.trim().to_string(),
            email,
            password_hash,
            platform_id,
            role: UserRole::User,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
        };
        let user = self.repository.create(user).await?;
        debug!("Registered user {}", user.id);

        if let Some(club_service) = &self.club_service {
            club_service.get_or_create_club(&user.id).await?;
        }

        self.session_for(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let email = email.trim().to_lowercase();
        // Unknown email and wrong password collapse to the same error.
        let user = self
            .repository
            .find_by_email(&email)?
            .ok_or(AuthError::InvalidCredentials)?;
        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }
        self.session_for(user)
    }

    fn authenticate(&self, token: &str) -> Result<String> {
        self.tokens.verify(token)
    }

    fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        let user = self.repository.find_by_id(user_id)?;
        Ok(UserProfile::from(user))
    }
}
