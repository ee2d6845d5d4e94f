/**
 * Micropost Model and Store
 *
 * Same layering as the user store: a model struct, a persistence port as
 * a trait, a PostgreSQL implementation, and an in-memory implementation
 * for the test suite.
 */

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreError;

/// Micropost record
///
/// Serialized directly as the response body; every micropost belongs to
/// exactly one user.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Micropost {
    pub id: Uuid,
    pub title: String,
    /// Owning user (foreign key)
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to persist a new micropost
#[derive(Debug, Clone)]
pub struct NewMicropost {
    pub title: String,
    pub user_id: Uuid,
}

/// Persistence port for microposts
#[async_trait]
pub trait MicropostStore: Send + Sync {
    async fn insert(&self, new_micropost: NewMicropost) -> Result<Micropost, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Micropost>, StoreError>;
    async fn list(&self) -> Result<Vec<Micropost>, StoreError>;
}

/// PostgreSQL-backed `MicropostStore`
#[derive(Clone)]
pub struct PgMicropostStore {
    pool: PgPool,
}

impl PgMicropostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MicropostStore for PgMicropostStore {
    async fn insert(&self, new_micropost: NewMicropost) -> Result<Micropost, StoreError> {
        let now = Utc::now();

        let micropost = sqlx::query_as::<_, Micropost>(
            r#"
            INSERT INTO microposts (id, title, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, user_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_micropost.title)
        .bind(new_micropost.user_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(micropost)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Micropost>, StoreError> {
        let micropost = sqlx::query_as::<_, Micropost>(
            "SELECT id, title, user_id, created_at, updated_at FROM microposts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(micropost)
    }

    async fn list(&self) -> Result<Vec<Micropost>, StoreError> {
        let microposts = sqlx::query_as::<_, Micropost>(
            "SELECT id, title, user_id, created_at, updated_at FROM microposts ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(microposts)
    }
}

/// In-memory `MicropostStore` used by the test suite in place of Postgres.
#[derive(Default)]
pub struct MemoryMicropostStore {
    microposts: Mutex<Vec<Micropost>>,
}

#[async_trait]
impl MicropostStore for MemoryMicropostStore {
    async fn insert(&self, new_micropost: NewMicropost) -> Result<Micropost, StoreError> {
        let now = Utc::now();
        let micropost = Micropost {
            id: Uuid::new_v4(),
            title: new_micropost.title,
            user_id: new_micropost.user_id,
            created_at: now,
            updated_at: now,
        };
        self.microposts.lock().unwrap().push(micropost.clone());
        Ok(micropost)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Micropost>, StoreError> {
        let microposts = self.microposts.lock().unwrap();
        Ok(microposts.iter().find(|m| m.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Micropost>, StoreError> {
        Ok(self.microposts.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_insert_and_lookup() {
        let store = MemoryMicropostStore::default();
        let user_id = Uuid::new_v4();
        let micropost = store
            .insert(NewMicropost {
                title: "first post".to_string(),
                user_id,
            })
            .await
            .unwrap();

        assert_eq!(micropost.user_id, user_id);

        let found = store.find_by_id(micropost.id).await.unwrap().unwrap();
        assert_eq!(found.title, "first post");

        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_list() {
        let store = MemoryMicropostStore::default();
        let user_id = Uuid::new_v4();
        for title in ["one", "two", "three"] {
            store
                .insert(NewMicropost {
                    title: title.to_string(),
                    user_id,
                })
                .await
                .unwrap();
        }

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 3);
    }
}
