//! User request and response types
//!
//! `NewUser` and `UserChanges` are the partial-user inputs accepted by the
//! create and update endpoints. `UserResponse` is the only shape a user ever
//! leaves the server in; it has no password field at all.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Payload for creating a user
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    /// Plaintext on the way in; hashed by the user service before storage
    #[serde(default)]
    pub password: Option<String>,
}

impl NewUser {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Some(password.into()),
        }
    }

    /// Basic shape checks on the incoming payload
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_email(&self.email)
    }
}

/// Payload for updating a user; absent fields are left untouched
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl UserChanges {
    pub fn password(password: impl Into<String>) -> Self {
        Self {
            email: None,
            password: Some(password.into()),
        }
    }

    pub fn validate(&self) -> Result<(), SharedError> {
        match &self.email {
            Some(email) => validate_email(email),
            None => Ok(()),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn validate_email(email: &str) -> Result<(), SharedError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(SharedError::validation("email", "Email is required"));
    }
    // Basic check, the unique index does the real work
    if !email.contains('@') {
        return Err(SharedError::validation("email", "Invalid email format"));
    }
    Ok(())
}
