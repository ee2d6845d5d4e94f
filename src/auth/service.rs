/**
 * Account Service
 *
 * Orchestrates signup, login, and account lookup on top of the user
 * store, the credential hasher, and the token issuer.
 *
 * # Security
 *
 * - Signup performs a single atomic insert and lets the unique email
 *   index arbitrate duplicates; a unique-constraint violation surfaces
 *   as the conflict outcome. There is no separate existence check, so
 *   concurrent signups with the same email cannot race past each other.
 * - Login returns one identical error for "no such email" and "wrong
 *   password", preventing account enumeration.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::tokens::TokenKeys;
use crate::error::{ApiError, StoreError};
use crate::users::store::{NewUser, User, UserStore, DEFAULT_AVATAR_PATH, DEFAULT_ROLE};

/// Signup input after request validation
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    /// Optional role label; defaults to `"user"`
    pub role: Option<String>,
    /// Optional avatar path; defaults to the built-in placeholder
    pub avatar_path: Option<String>,
}

/// Signup, login, and lookup over an injected user store
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserStore>,
    tokens: TokenKeys,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenKeys) -> Self {
        Self { users, tokens }
    }

    /// Register a new account
    ///
    /// Hashes the password and persists the account in one atomic insert.
    /// A duplicate email maps to `ApiError::EmailTaken` (409); the
    /// plaintext password is dropped here and never stored or returned.
    pub async fn sign_up(&self, account: NewAccount) -> Result<User, ApiError> {
        let password_hash = hash_password(&account.password).map_err(|e| {
            tracing::error!("failed to hash password: {e}");
            ApiError::internal("Failed to create user")
        })?;

        let new_user = NewUser {
            email: account.email,
            password_hash,
            role: account.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            avatar_path: account
                .avatar_path
                .unwrap_or_else(|| DEFAULT_AVATAR_PATH.to_string()),
        };

        match self.users.insert(new_user).await {
            Ok(user) => {
                tracing::info!("user created: {}", user.email);
                Ok(user)
            }
            Err(StoreError::Conflict) => Err(ApiError::EmailTaken),
            Err(e) => {
                tracing::error!("failed to create user: {e}");
                Err(ApiError::internal("Failed to create user"))
            }
        }
    }

    /// Authenticate an account and issue a bearer token
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller: both return `ApiError::InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), ApiError> {
        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(|e| {
                tracing::error!("login lookup failed: {e}");
                ApiError::internal("Failed to log in")
            })?
            .ok_or(ApiError::InvalidCredentials)?;

        if !verify_password(&user.password_hash, password) {
            tracing::warn!("failed login attempt for {}", user.email);
            return Err(ApiError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id, &user.email).map_err(|e| {
            tracing::error!("failed to issue token: {e}");
            ApiError::internal("Failed to log in")
        })?;

        tracing::info!("user logged in: {}", user.email);
        Ok((token, user))
    }

    /// Look up an account by id
    ///
    /// Callers hold an already-verified identity, so an empty lookup is a
    /// distinct not-found outcome rather than an auth failure.
    pub async fn get_by_id(&self, id: Uuid) -> Result<User, ApiError> {
        self.users
            .find_by_id(id)
            .await
            .map_err(|e| {
                tracing::error!("user lookup failed: {e}");
                ApiError::internal("Failed to fetch user")
            })?
            .ok_or(ApiError::UserNotFound)
    }
}
