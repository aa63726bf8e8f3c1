//! User directory entity model and DTOs.

use doctrail_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub id_number: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    /// Display role (e.g. `"Admin"`, `"Audit Team Leader"`).
    pub role: String,
    pub address: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub id_number: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub address: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            id_number: user.id_number,
            first_name: user.first_name,
            middle_name: user.middle_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role,
            address: user.address,
        }
    }
}

/// DTO for inserting a user. The password is hashed before it reaches the
/// repository.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id_number: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub address: String,
}

/// DTO for updating a user. All fields optional; `password_hash` is set
/// only when the caller supplied a new password.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub id_number: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<String>,
    pub address: Option<String>,
}
