/**
 * User Model
 *
 * The persisted user row and the inputs a store accepts. Store inputs only
 * ever carry a password hash; turning plaintext into a hash is the
 * service's job.
 */

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::UserResponse;

/// User struct representing a row in the `users` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Login key, unique across users
    pub email: String,
    /// bcrypt digest; `None` for accounts created without a password
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// A user ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct UserInsert {
    pub email: String,
    pub password_hash: Option<String>,
}

/// Column updates for an existing user; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub password_hash: Option<String>,
}
