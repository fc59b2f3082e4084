//! Password hashing and session tokens.
//!
//! Implements the core `PasswordHasherTrait` and `TokenIssuerTrait` with
//! argon2 and JWTs, plus the `AuthUser` extractor that resolves the bearer
//! token on protected routes.

use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::Argon2;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::main_lib::AppState;
use touchline_core::users::{AuthError, PasswordHasherTrait, TokenIssuerTrait};
use touchline_core::{Error, Result};

pub struct Argon2PasswordHasher;

impl PasswordHasherTrait for Argon2PasswordHasher {
    fn hash(&self, plain: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| Error::Unexpected(format!("password hashing failed: {e}")))?;
        Ok(digest.to_string())
    }

    fn verify(&self, plain: &str, digest: &str) -> Result<bool> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| Error::Unexpected(format!("stored password digest is malformed: {e}")))?;
        Ok(Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: u64,
    exp: u64,
}

pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: u64,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    fn now() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

impl TokenIssuerTrait for JwtTokenIssuer {
    fn sign(&self, user_id: &str) -> Result<String> {
        let now = Self::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| Error::Unexpected(format!("token signing failed: {e}")))
    }

    fn verify(&self, token: &str) -> Result<String> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default()).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    Error::Auth(AuthError::TokenExpired)
                }
                _ => Error::Auth(AuthError::TokenInvalid),
            },
        )?;
        Ok(data.claims.sub)
    }
}

/// Extractor for protected routes: the authenticated user's id.
///
/// Accepts `Authorization: Bearer <token>` or the legacy `x-auth-token`
/// header carrying the bare token.
pub struct AuthUser(pub String);

fn bearer_token(parts: &Parts) -> Option<&str> {
    if let Some(value) = parts.headers.get(axum::http::header::AUTHORIZATION) {
        if let Ok(value) = value.to_str() {
            if let Some(token) = value.strip_prefix("Bearer ") {
                return Some(token.trim());
            }
        }
    }
    parts
        .headers
        .get("x-auth-token")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> std::result::Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| ApiError::from(Error::Auth(AuthError::MissingToken)))?;
        let user_id = state.user_service.authenticate(token)?;
        Ok(AuthUser(user_id))
    }
}
