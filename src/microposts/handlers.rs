/**
 * Micropost HTTP Handlers
 *
 * All routes here sit behind the auth gate:
 *
 * - `POST /microposts` - create a micropost owned by the caller
 * - `GET /microposts` - list all microposts
 * - `GET /microposts/{id}` - fetch one micropost
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::microposts::store::{Micropost, MicropostStore, NewMicropost};
use crate::middleware::auth::AuthUser;

/// Create request body
#[derive(Debug, Deserialize)]
pub struct MicropostRequest {
    pub title: String,
}

pub async fn create_micropost(
    State(microposts): State<Arc<dyn MicropostStore>>,
    AuthUser(auth): AuthUser,
    Json(request): Json<MicropostRequest>,
) -> Result<(StatusCode, Json<Micropost>), ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::validation("Title is required"));
    }

    let micropost = microposts
        .insert(NewMicropost {
            title: request.title,
            user_id: auth.user_id,
        })
        .await
        .map_err(|e| {
            tracing::error!("failed to create micropost: {e}");
            ApiError::internal("Failed to create micropost")
        })?;

    tracing::info!("micropost {} created by {}", micropost.id, auth.email);
    Ok((StatusCode::CREATED, Json(micropost)))
}

pub async fn list_microposts(
    State(microposts): State<Arc<dyn MicropostStore>>,
) -> Result<Json<Vec<Micropost>>, ApiError> {
    let all = microposts.list().await.map_err(|e| {
        tracing::error!("failed to list microposts: {e}");
        ApiError::internal("Failed to fetch microposts")
    })?;

    Ok(Json(all))
}

pub async fn get_micropost(
    State(microposts): State<Arc<dyn MicropostStore>>,
    Path(id): Path<String>,
) -> Result<Json<Micropost>, ApiError> {
    let id = uuid::Uuid::parse_str(&id).map_err(|_| ApiError::RecordNotFound)?;

    let micropost = microposts
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!("failed to fetch micropost {id}: {e}");
            ApiError::internal("Failed to fetch micropost")
        })?
        .ok_or(ApiError::RecordNotFound)?;

    Ok(Json(micropost))
}
