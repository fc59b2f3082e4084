//! User domain models.

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::{errors::ValidationError, Error, Result};

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"))
}

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "ADMIN" => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

/// Lifecycle state of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    Active,
    Suspended,
    Banned,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Suspended => "SUSPENDED",
            UserStatus::Banned => "BANNED",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "SUSPENDED" => UserStatus::Suspended,
            "BANNED" => UserStatus::Banned,
            _ => UserStatus::Active,
        }
    }
}

/// Full user record, including the password hash.
///
/// Deliberately not `Serialize`: the hash must never leave the service layer.
/// Clients only ever see a [`UserProfile`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    /// Identifier on the external gaming platform. Unique, immutable.
    pub platform_id: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Public view of a user, safe to return to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub platform_id: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: NaiveDateTime,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            platform_id: user.platform_id,
            role: user.role,
            status: user.status,
            created_at: user.created_at,
        }
    }
}

/// Input model for registering a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub platform_id: String,
}

impl NewUser {
    /// Validates the registration payload.
    pub fn validate(&self) -> Result<()> {
        let name = self.name.trim();
        if name.len() < 3 || name.len() > 50 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Name must be between 3 and 50 characters".to_string(),
            )));
        }
        if !email_regex().is_match(self.email.trim()) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Email address is not valid".to_string(),
            )));
        }
        if self.password.len() < 8 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Password must be at least 8 characters".to_string(),
            )));
        }
        if self.platform_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "platformId".to_string(),
            )));
        }
        Ok(())
    }
}

/// A signed session token plus the public profile it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}
