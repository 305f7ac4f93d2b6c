//! Storage seams for the catalog reconciliation engine.
//!
//! The engine in `reelvault-catalog` depends on these traits rather than on
//! concrete repositories, so it can be driven by in-memory stores in tests.
//! The traits are defined here in `reelvault-core` and implemented in
//! `reelvault-database`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;

/// The slice of a movie row the reconciliation engine reads.
///
/// The genre field is free text and may encode several genres separated by
/// commas, slashes, or pipes. It is read-only input: the engine never
/// writes back to movies.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MovieRecord {
    /// Movie identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// Raw genre text as entered by the user.
    pub genre: String,
}

/// Read access to a user's movies for the backfill sweep.
#[async_trait]
pub trait MovieCatalog: Send + Sync + 'static {
    /// List every movie of `owner` that belongs to no folder at all.
    ///
    /// A movie with even one membership — including one added manually to
    /// an unrelated folder — is considered already categorized and is not
    /// returned.
    async fn find_unlinked(&self, owner: Uuid) -> AppResult<Vec<MovieRecord>>;
}

/// Lookup/create-if-absent access to per-user folders.
#[async_trait]
pub trait FolderDirectory: Send + Sync + 'static {
    /// Return the id of the folder named exactly `name` under `owner`,
    /// creating the folder if it does not exist yet.
    ///
    /// `name` must be non-empty and already trimmed; callers are
    /// responsible for trimming. A concurrent create of the same
    /// `(owner, name)` must be resolved internally — the caller always
    /// receives the surviving folder's id, never a conflict error.
    async fn get_or_create(&self, owner: Uuid, name: &str) -> AppResult<Uuid>;
}

/// Lookup/create-if-absent access to folder membership edges.
#[async_trait]
pub trait MembershipLedger: Send + Sync + 'static {
    /// Ensure the `(folder, movie)` edge exists.
    ///
    /// Returns `true` iff a new edge was inserted. Repeated calls with the
    /// same arguments are no-ops after the first, including under
    /// concurrent invocation.
    async fn ensure_linked(&self, folder_id: Uuid, movie_id: Uuid) -> AppResult<bool>;
}
