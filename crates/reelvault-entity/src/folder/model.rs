//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named, per-user collection of movies.
///
/// Folders are created either explicitly through the folder-management
/// pages or lazily by the reconciliation engine. The two origins are
/// indistinguishable. Names are unique per owner, case-sensitively.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: Uuid,
    /// The folder owner.
    pub user_id: Uuid,
    /// Folder name (a genre name when engine-created).
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// The folder owner.
    pub user_id: Uuid,
    /// Folder name.
    pub name: String,
    /// Optional description (the engine always leaves this empty).
    pub description: Option<String>,
}
