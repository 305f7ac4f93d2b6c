//! Movie repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use reelvault_core::error::{AppError, ErrorKind};
use reelvault_core::result::AppResult;
use reelvault_core::traits::{MovieCatalog, MovieRecord};
use reelvault_entity::movie::{CreateMovie, Movie};

/// Repository for movie CRUD and catalog queries.
#[derive(Debug, Clone)]
pub struct MovieRepository {
    pool: PgPool,
}

impl MovieRepository {
    /// Create a new movie repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a movie by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find movie", e))
    }

    /// List all movies of a user, newest first.
    pub async fn find_by_owner(&self, owner: Uuid) -> AppResult<Vec<Movie>> {
        sqlx::query_as::<_, Movie>(
            "SELECT * FROM movies WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list movies", e))
    }

    /// Distinct raw genre strings of a user's movies, for the dashboard
    /// filter dropdown.
    pub async fn distinct_genres(&self, owner: Uuid) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT genre FROM movies WHERE user_id = $1 ORDER BY genre ASC",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list genres", e))
    }

    /// Insert a new movie after validating the payload.
    pub async fn create(&self, data: &CreateMovie) -> AppResult<Movie> {
        data.validate()?;

        sqlx::query_as::<_, Movie>(
            "INSERT INTO movies (user_id, title, genre, release_year, poster_path) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.title)
        .bind(&data.genre)
        .bind(data.release_year)
        .bind(&data.poster_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("movies_user_id_fkey") =>
            {
                AppError::validation(format!("Unknown movie owner {}", data.user_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create movie", e),
        })
    }
}

#[async_trait]
impl MovieCatalog for MovieRepository {
    async fn find_unlinked(&self, owner: Uuid) -> AppResult<Vec<MovieRecord>> {
        let movies = sqlx::query_as::<_, Movie>(
            "SELECT m.* FROM movies m \
             WHERE m.user_id = $1 \
               AND NOT EXISTS ( \
                   SELECT 1 FROM folder_movies fm WHERE fm.movie_id = m.id \
               ) \
             ORDER BY m.created_at ASC",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list unlinked movies", e)
        })?;

        Ok(movies.iter().map(Movie::to_record).collect())
    }
}
