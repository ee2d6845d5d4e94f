/**
 * Authentication Handler Types
 *
 * Request and response types shared by the signup, login, and me
 * handlers. `UserResponse` is the only shape a user ever leaves the API
 * in - it has no password field by construction.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::store::User;

/// Signup request body
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    /// Plaintext password; hashed before storage
    pub password: String,
    /// Optional role label, defaults to "user"
    #[serde(default)]
    pub role: Option<String>,
    /// Optional avatar path, defaults to the placeholder image
    #[serde(default)]
    pub avatar_path: Option<String>,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public user fields, safe to return to clients
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub role: String,
    pub avatar_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            avatar_path: user.avatar_path,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Login response: the bearer token plus the profile fields, flattened
/// into one object
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(flatten)]
    pub user: UserResponse,
}
