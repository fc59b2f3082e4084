//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use touchline_core::users::{User, UserRole, UserStatus};

/// Database model for users
#[derive(Queryable, Insertable, Identifiable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub platform_id: String,
    pub role: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion to and from the domain model
impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            password_hash: db.password_hash,
            platform_id: db.platform_id,
            role: UserRole::parse(&db.role),
            status: UserStatus::parse(&db.status),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<User> for UserDB {
    fn from(domain: User) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            email: domain.email,
            password_hash: domain.password_hash,
            platform_id: domain.platform_id,
            role: domain.role.as_str().to_string(),
            status: domain.status.as_str().to_string(),
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
