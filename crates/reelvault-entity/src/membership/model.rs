//! Folder membership entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An edge recording that a movie belongs to a folder.
///
/// The pair `(folder_id, movie_id)` is the primary key; an edge carries no
/// payload beyond its existence. Edges are append-only from the
/// reconciliation engine's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Membership {
    /// The containing folder.
    pub folder_id: Uuid,
    /// The member movie.
    pub movie_id: Uuid,
    /// When the edge was created.
    pub created_at: DateTime<Utc>,
}
