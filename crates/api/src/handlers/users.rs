//! Handlers for the `/users` directory resource.
//!
//! Registration hashes passwords with Argon2id before they reach the
//! repository; token issuance and login are owned by an external
//! collaborator and have no endpoints here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use doctrail_core::error::CoreError;
use doctrail_core::types::DbId;
use doctrail_db::models::user::{NewUser, UpdateUser, UserResponse};
use doctrail_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::password;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// POST /users body. Field names match the original register payloads.
#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub id_number: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// PUT /users/{id} body. Only provided fields are written; a non-empty
/// `password` replaces the stored hash.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id_number: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Minimal shape check for an email address: one `@` with a non-empty
/// local part and a dotted, non-empty domain.
fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
        }
        None => false,
    }
}

fn validate_registration(input: &RegisterUserRequest) -> Result<(), CoreError> {
    for (value, label) in [
        (&input.id_number, "ID Number"),
        (&input.first_name, "First Name"),
        (&input.last_name, "Last Name"),
        (&input.email, "Email"),
        (&input.role, "Role"),
    ] {
        if value.trim().is_empty() {
            return Err(CoreError::Validation(format!("{label} is required")));
        }
    }
    if !is_valid_email(&input.email) {
        return Err(CoreError::Validation("Invalid email format".to_string()));
    }
    password::validate_password_strength(&input.password).map_err(CoreError::Validation)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<RegisterUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    validate_registration(&input)?;

    if UserRepo::identity_taken(&state.pool, input.id_number.trim(), input.email.trim()).await? {
        return Err(CoreError::Conflict("ID Number or Email already exists".to_string()).into());
    }

    let password_hash = password::hash_password(&input.password)
        .map_err(|err| AppError::InternalError(format!("Password hashing failed: {err}")))?;

    let user = UserRepo::create(
        &state.pool,
        &NewUser {
            id_number: input.id_number.trim().to_string(),
            first_name: input.first_name.trim().to_string(),
            middle_name: input.middle_name.as_deref().unwrap_or("").trim().to_string(),
            last_name: input.last_name.trim().to_string(),
            email: input.email.trim().to_string(),
            password_hash,
            role: input.role.trim().to_string(),
            address: input.address.as_deref().unwrap_or("").trim().to_string(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: user.into() })))
}

/// GET /api/v1/users
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list(&state.pool).await?;
    let users: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
    Ok(Json(DataResponse { data: users }))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(DataResponse { data: user.into() }))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    if let Some(email) = input.email.as_deref() {
        if !is_valid_email(email) {
            return Err(CoreError::Validation("Invalid email format".to_string()).into());
        }
    }

    // An empty password field means "keep the current one".
    let password_hash = match input.password.as_deref().filter(|p| !p.is_empty()) {
        Some(plain) => {
            password::validate_password_strength(plain)
                .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
            Some(password::hash_password(plain).map_err(|err| {
                AppError::InternalError(format!("Password hashing failed: {err}"))
            })?)
        }
        None => None,
    };

    let user = UserRepo::update(
        &state.pool,
        id,
        &UpdateUser {
            id_number: input.id_number,
            first_name: input.first_name,
            middle_name: input.middle_name,
            last_name: input.last_name,
            email: input.email,
            password_hash,
            role: input.role,
            address: input.address,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(DataResponse { data: user.into() }))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if UserRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}
