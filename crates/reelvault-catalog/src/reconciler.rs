//! The reconciler: per-movie categorization and the backfill sweep.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use reelvault_core::result::AppResult;
use reelvault_core::traits::{FolderDirectory, MembershipLedger, MovieCatalog, MovieRecord};

use crate::tokenizer::tokenize;

/// What a single-movie reconciliation touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReconcileOutcome {
    /// Distinct ids of the folders the movie's genre tokens resolved to.
    pub folders: Vec<Uuid>,
    /// Number of membership edges newly inserted by this run.
    pub memberships_created: u64,
}

/// Aggregate result of a backfill sweep over one user's catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SweepOutcome {
    /// Candidate movies examined (movies of the owner with no membership).
    pub movies_examined: u64,
    /// Movies skipped after a storage failure mid-reconciliation.
    pub movies_failed: u64,
    /// Distinct folders touched across the whole sweep.
    pub folders_touched: u64,
    /// Membership edges newly inserted across the whole sweep.
    pub memberships_created: u64,
}

/// Orchestrates the tokenizer, folder directory, and membership ledger.
///
/// Both entry points share this one code path, so the inline
/// post-creation pass and the dashboard sweep give identical guarantees:
/// no duplicate folders, no duplicate memberships, and idempotence across
/// repeated runs.
#[derive(Clone)]
pub struct Reconciler {
    movies: Arc<dyn MovieCatalog>,
    folders: Arc<dyn FolderDirectory>,
    memberships: Arc<dyn MembershipLedger>,
}

impl Reconciler {
    /// Creates a new reconciler over the given storage seams.
    pub fn new(
        movies: Arc<dyn MovieCatalog>,
        folders: Arc<dyn FolderDirectory>,
        memberships: Arc<dyn MembershipLedger>,
    ) -> Self {
        Self {
            movies,
            folders,
            memberships,
        }
    }

    /// Reconcile one movie against its genre text.
    ///
    /// Each token is an independent unit of work: the folder is looked up
    /// or created, then the membership edge is ensured. Work already
    /// committed for earlier tokens stays committed if a later token
    /// fails; the error aborts only the remaining tokens of this movie.
    ///
    /// Callers on the movie-creation path must treat a failure here as
    /// best-effort: it must never fail or roll back the creation itself.
    pub async fn reconcile_one(&self, movie: &MovieRecord) -> AppResult<ReconcileOutcome> {
        let tokens = tokenize(&movie.genre);
        if tokens.is_empty() {
            debug!(movie_id = %movie.id, "No genre tokens, nothing to reconcile");
            return Ok(ReconcileOutcome::default());
        }

        let mut outcome = ReconcileOutcome::default();

        for token in &tokens {
            let folder_id = self.folders.get_or_create(movie.user_id, token).await?;

            if self.memberships.ensure_linked(folder_id, movie.id).await? {
                outcome.memberships_created += 1;
            }

            if !outcome.folders.contains(&folder_id) {
                outcome.folders.push(folder_id);
            }
        }

        debug!(
            movie_id = %movie.id,
            folders = outcome.folders.len(),
            created = outcome.memberships_created,
            "Movie reconciled"
        );

        Ok(outcome)
    }

    /// Backfill sweep: reconcile every movie of `owner` that belongs to no
    /// folder at all.
    ///
    /// A movie with any existing membership — even one added manually to a
    /// folder unrelated to its genre — is considered already categorized
    /// and is never revisited. A storage failure on one movie is logged
    /// and counted; the sweep continues with the next candidate. Only a
    /// failure of the candidate query itself aborts the sweep.
    pub async fn reconcile_all_unlinked(&self, owner: Uuid) -> AppResult<SweepOutcome> {
        let candidates = self.movies.find_unlinked(owner).await?;

        let mut outcome = SweepOutcome::default();
        let mut touched: HashSet<Uuid> = HashSet::new();

        for movie in &candidates {
            outcome.movies_examined += 1;

            match self.reconcile_one(movie).await {
                Ok(one) => {
                    touched.extend(one.folders.iter().copied());
                    outcome.memberships_created += one.memberships_created;
                }
                Err(e) => {
                    warn!(
                        movie_id = %movie.id,
                        error = %e,
                        "Skipping movie after reconciliation failure"
                    );
                    outcome.movies_failed += 1;
                }
            }
        }

        outcome.folders_touched = touched.len() as u64;

        info!(
            user_id = %owner,
            examined = outcome.movies_examined,
            failed = outcome.movies_failed,
            folders = outcome.folders_touched,
            created = outcome.memberships_created,
            "Catalog sweep complete"
        );

        Ok(outcome)
    }
}

impl std::fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconciler").finish_non_exhaustive()
    }
}
