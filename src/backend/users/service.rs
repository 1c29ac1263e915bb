/**
 * User Service
 *
 * Business logic over the credential store. The service owns the one rule
 * that matters: plaintext passwords are hashed before they are handed to
 * the store, on create and on update alike.
 *
 * The service keeps no copies of users between calls; every operation goes
 * back to the store.
 *
 * bcrypt is CPU-bound, so hashing and verification run on the blocking
 * pool and only suspend the request that asked for them.
 */

use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinError;
use uuid::Uuid;

use crate::backend::store::StoreError;
use crate::backend::users::model::{User, UserInsert, UserUpdate};
use crate::backend::users::store::UserStore;
use crate::shared::{NewUser, UserChanges};

#[derive(Debug, Error)]
pub enum UserError {
    /// Unknown email, no stored hash, or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailTaken,

    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("password hashing task failed: {0}")]
    HashingTask(#[from] JoinError),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for UserError {
    fn from(err: StoreError) -> Self {
        match err {
            // email is the only unique column besides the generated id
            StoreError::Conflict(_) => Self::EmailTaken,
            other => Self::Store(other),
        }
    }
}

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>, UserError> {
        Ok(self.store.find_by_id(id).await?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self.store.find_by_email(email).await?)
    }

    /// Hash the password, if any, and insert the user
    pub async fn create_user(&self, user: NewUser) -> Result<User, UserError> {
        let password_hash = match user.password {
            Some(password) => Some(self.hash_password(password).await?),
            None => None,
        };

        let user = self
            .store
            .create(UserInsert {
                email: user.email,
                password_hash,
            })
            .await?;

        tracing::info!("User created: {}", user.id);
        Ok(user)
    }

    /// Return the user whose stored hash matches `password`
    ///
    /// Fails with `UserError::InvalidCredentials` whatever the reason:
    /// unknown email, account without a password, or mismatch.
    pub async fn check_user_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, UserError> {
        let Some(user) = self.get_user_by_email(email).await? else {
            tracing::debug!("Credential check for unknown email");
            return Err(UserError::InvalidCredentials);
        };
        let Some(hash) = user.password_hash.clone() else {
            tracing::debug!("Credential check for user {} without a password", user.id);
            return Err(UserError::InvalidCredentials);
        };

        if self.verify_password(password.to_string(), hash).await? {
            Ok(user)
        } else {
            tracing::debug!("Password mismatch for user {}", user.id);
            Err(UserError::InvalidCredentials)
        }
    }

    /// Apply `changes` to user `id`, re-hashing the password if one is given
    pub async fn update_user(&self, changes: UserChanges, id: Uuid) -> Result<Option<User>, UserError> {
        let password_hash = match changes.password {
            Some(password) => Some(self.hash_password(password).await?),
            None => None,
        };

        let user = self
            .store
            .update(
                id,
                UserUpdate {
                    email: changes.email,
                    password_hash,
                },
            )
            .await?;

        if user.is_some() {
            tracing::info!("User updated: {}", id);
        }
        Ok(user)
    }

    /// Delete user `id`; `false` if there was no such user
    pub async fn delete_user(&self, id: Uuid) -> Result<bool, UserError> {
        let deleted = self.store.delete(id).await?;
        if deleted {
            tracing::info!("User deleted: {}", id);
        }
        Ok(deleted)
    }

    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let cost = self.bcrypt_cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hash)
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, UserError> {
        let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await?;
        match outcome {
            Ok(matches) => Ok(matches),
            // A corrupt stored hash can never match
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {}", e);
                Ok(false)
            }
        }
    }
}
