/**
 * User HTTP Handlers
 *
 * All routes here sit behind the auth gate:
 *
 * - `GET /users` - list all users
 * - `GET /users/{id}` - fetch one user
 * - `PUT /users/avatar` - replace the caller's avatar (multipart upload)
 */

use std::path::Path as FilePath;
use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    response::Json,
};
use tokio::fs;

use crate::auth::handlers::types::UserResponse;
use crate::error::{ApiError, StoreError};
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::users::avatar::{avatar_filename, is_valid_image_name, AVATAR_PUBLIC_PREFIX};
use crate::users::store::{UserStore, DEFAULT_AVATAR_PATH};

pub async fn list_users(
    State(users): State<Arc<dyn UserStore>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let all = users.list().await.map_err(|e| {
        tracing::error!("failed to list users: {e}");
        ApiError::internal("Failed to fetch users")
    })?;

    Ok(Json(all.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(users): State<Arc<dyn UserStore>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    // A non-UUID id cannot match any record; same outcome as a miss.
    let id = uuid::Uuid::parse_str(&id).map_err(|_| ApiError::RecordNotFound)?;

    let user = users
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!("failed to fetch user {id}: {e}");
            ApiError::internal("Failed to fetch user")
        })?
        .ok_or(ApiError::RecordNotFound)?;

    Ok(Json(user.into()))
}

/// Replace the authenticated user's avatar
///
/// Expects a multipart form with a file field named `avatar`. The file
/// is written under the configured upload directory, the previous
/// avatar is removed unless it is the default placeholder, and the
/// user row is updated with the new public path.
pub async fn update_avatar(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    mut multipart: Multipart,
) -> Result<Json<UserResponse>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::validation("No file uploaded"))?
    {
        if field.name() == Some("avatar") {
            let file_name = field
                .file_name()
                .map(str::to_owned)
                .ok_or_else(|| ApiError::validation("No file uploaded"))?;
            let data = field.bytes().await.map_err(|e| {
                tracing::error!("failed to read avatar upload: {e}");
                ApiError::internal("Failed to save file")
            })?;
            upload = Some((file_name, data));
            break;
        }
    }

    let Some((original_name, data)) = upload else {
        return Err(ApiError::validation("No file uploaded"));
    };

    if !is_valid_image_name(&original_name) {
        tracing::warn!("rejected avatar upload with filename {original_name:?}");
        return Err(ApiError::validation(
            "Invalid file type. Only images are allowed",
        ));
    }

    let filename = avatar_filename(auth.user_id, &original_name);

    fs::create_dir_all(&state.upload_dir).await.map_err(|e| {
        tracing::error!("failed to create upload directory: {e}");
        ApiError::internal("Failed to create directory")
    })?;
    fs::write(state.upload_dir.join(&filename), &data)
        .await
        .map_err(|e| {
            tracing::error!("failed to write avatar file: {e}");
            ApiError::internal("Failed to save file")
        })?;

    let current = state
        .users
        .find_by_id(auth.user_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to fetch user {}: {e}", auth.user_id);
            ApiError::internal("Failed to fetch user")
        })?
        .ok_or(ApiError::UserNotFound)?;

    // Best-effort cleanup of the replaced file; the placeholder is shared
    // and never deleted.
    if current.avatar_path != DEFAULT_AVATAR_PATH {
        if let Some(old_name) = FilePath::new(&current.avatar_path).file_name() {
            // Two uploads in the same second reuse the filename; don't
            // delete what was just written.
            if old_name != std::ffi::OsStr::new(&filename) {
                let _ = fs::remove_file(state.upload_dir.join(old_name)).await;
            }
        }
    }

    let public_path = format!("{AVATAR_PUBLIC_PREFIX}/{filename}");
    let updated = state
        .users
        .update_avatar(auth.user_id, &public_path)
        .await
        .map_err(|e| match e {
            StoreError::NotFound => ApiError::UserNotFound,
            e => {
                tracing::error!("failed to update avatar for {}: {e}", auth.user_id);
                ApiError::internal("Failed to update user")
            }
        })?;

    tracing::info!("avatar updated for {}", updated.email);
    Ok(Json(updated.into()))
}
