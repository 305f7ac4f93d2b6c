//! Folder repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use reelvault_core::error::{AppError, ErrorKind};
use reelvault_core::result::AppResult;
use reelvault_core::traits::FolderDirectory;
use reelvault_entity::folder::{CreateFolder, Folder};

/// Repository for folder lookups and lazy creation.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a folder by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    /// List all folders of a user, sorted by name.
    pub async fn find_by_owner(&self, owner: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE user_id = $1 ORDER BY name ASC")
            .bind(owner)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    /// Find a folder by owner and exact, case-sensitive name.
    pub async fn find_by_owner_and_name(
        &self,
        owner: Uuid,
        name: &str,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE user_id = $1 AND name = $2")
            .bind(owner)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find folder by name", e)
            })
    }

    /// Create a new folder.
    pub async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (user_id, name, description) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("folders_user_id_name_key") =>
            {
                AppError::conflict(format!("Folder '{}' already exists", data.name))
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("folders_user_id_fkey") =>
            {
                AppError::validation(format!("Unknown folder owner {}", data.user_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", e),
        })
    }

    /// Look up the folder `(owner, name)`, creating it if absent.
    ///
    /// If the insert loses a race against a concurrent creator, the unique
    /// constraint rejects it and the lookup is retried once to fetch the
    /// winner's row. `name` must arrive non-empty and already trimmed.
    pub async fn get_or_create(&self, owner: Uuid, name: &str) -> AppResult<Folder> {
        if name.is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        let data = CreateFolder {
            user_id: owner,
            name: name.to_string(),
            description: None,
        };

        super::retry::get_or_create_row(
            || self.find_by_owner_and_name(owner, name),
            || self.create(&data),
            || AppError::database(format!("Folder '{name}' vanished after insert conflict")),
        )
        .await
    }
}

#[async_trait]
impl FolderDirectory for FolderRepository {
    async fn get_or_create(&self, owner: Uuid, name: &str) -> AppResult<Uuid> {
        let folder = FolderRepository::get_or_create(self, owner, name).await?;
        Ok(folder.id)
    }
}
