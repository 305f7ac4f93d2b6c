//! Folder membership repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use reelvault_core::error::{AppError, ErrorKind};
use reelvault_core::result::AppResult;
use reelvault_core::traits::MembershipLedger;
use reelvault_entity::membership::Membership;

/// Repository for folder-movie membership edges.
#[derive(Debug, Clone)]
pub struct MembershipRepository {
    pool: PgPool,
}

impl MembershipRepository {
    /// Create a new membership repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the edge for a `(folder, movie)` pair.
    pub async fn find(&self, folder_id: Uuid, movie_id: Uuid) -> AppResult<Option<Membership>> {
        sqlx::query_as::<_, Membership>(
            "SELECT * FROM folder_movies WHERE folder_id = $1 AND movie_id = $2",
        )
        .bind(folder_id)
        .bind(movie_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find membership", e))
    }

    /// List the movies in a folder, newest edge first.
    pub async fn find_by_folder(&self, folder_id: Uuid) -> AppResult<Vec<Membership>> {
        sqlx::query_as::<_, Membership>(
            "SELECT * FROM folder_movies WHERE folder_id = $1 ORDER BY created_at DESC",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list memberships", e))
    }

    /// Insert a new membership edge.
    pub async fn create(&self, folder_id: Uuid, movie_id: Uuid) -> AppResult<Membership> {
        sqlx::query_as::<_, Membership>(
            "INSERT INTO folder_movies (folder_id, movie_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(folder_id)
        .bind(movie_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("folder_movies_pkey") =>
            {
                AppError::conflict("Movie is already in this folder")
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("folder_movies_folder_id_fkey") =>
            {
                AppError::validation(format!("Unknown folder {folder_id}"))
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("folder_movies_movie_id_fkey") =>
            {
                AppError::validation(format!("Unknown movie {movie_id}"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create membership", e),
        })
    }
}

#[async_trait]
impl MembershipLedger for MembershipRepository {
    async fn ensure_linked(&self, folder_id: Uuid, movie_id: Uuid) -> AppResult<bool> {
        super::retry::ensure_row(
            || self.find(folder_id, movie_id),
            || self.create(folder_id, movie_id),
        )
        .await
    }
}
