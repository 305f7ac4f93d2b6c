//! Lost-race recovery for lookup/create-if-absent operations.
//!
//! The folder directory and the membership ledger share the same
//! check-then-act shape: the lookup can miss while a concurrent caller is
//! inserting the same row, and the insert then fails on the uniqueness
//! constraint. These helpers recover that conflict locally so it never
//! escapes to the engine.

use std::future::Future;

use reelvault_core::error::AppError;
use reelvault_core::result::AppResult;

/// Look up a row, creating it if absent.
///
/// If the insert loses a race against a concurrent creator, the conflict
/// is swallowed and the lookup is retried once to fetch the winner's row.
/// `missing` builds the error for the pathological case where the row is
/// gone again on the retry (e.g. deleted in between).
pub(crate) async fn get_or_create_row<T, L, LFut, CFut>(
    lookup: L,
    create: impl FnOnce() -> CFut,
    missing: impl FnOnce() -> AppError,
) -> AppResult<T>
where
    L: Fn() -> LFut,
    LFut: Future<Output = AppResult<Option<T>>>,
    CFut: Future<Output = AppResult<T>>,
{
    if let Some(row) = lookup().await? {
        return Ok(row);
    }

    match create().await {
        Ok(row) => Ok(row),
        Err(e) if e.is_conflict() => lookup().await?.ok_or_else(missing),
        Err(e) => Err(e),
    }
}

/// Ensure a row exists, returning `true` iff it was inserted here.
///
/// A lost insert race means some other caller just created the row, which
/// satisfies this call exactly as if the lookup had found it.
pub(crate) async fn ensure_row<T, L, LFut, CFut>(
    lookup: L,
    create: impl FnOnce() -> CFut,
) -> AppResult<bool>
where
    L: Fn() -> LFut,
    LFut: Future<Output = AppResult<Option<T>>>,
    CFut: Future<Output = AppResult<T>>,
{
    if lookup().await?.is_some() {
        return Ok(false);
    }

    match create().await {
        Ok(_) => Ok(true),
        Err(e) if e.is_conflict() => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use reelvault_core::error::{AppError, ErrorKind};

    use super::{ensure_row, get_or_create_row};

    #[tokio::test]
    async fn existing_row_short_circuits_create() {
        let created = Cell::new(false);

        let row = get_or_create_row(
            || async { Ok::<_, AppError>(Some(7)) },
            || async {
                created.set(true);
                Ok(9)
            },
            || AppError::database("missing"),
        )
        .await
        .unwrap();

        assert_eq!(row, 7);
        assert!(!created.get());
    }

    #[tokio::test]
    async fn absent_row_is_created() {
        let row = get_or_create_row(
            || async { Ok::<Option<i32>, AppError>(None) },
            || async { Ok(42) },
            || AppError::database("missing"),
        )
        .await
        .unwrap();

        assert_eq!(row, 42);
    }

    #[tokio::test]
    async fn lost_insert_race_retries_lookup_and_returns_winner() {
        let lookups = Cell::new(0u32);

        let row = get_or_create_row(
            || async {
                lookups.set(lookups.get() + 1);
                // First lookup misses; the retry sees the winner's row.
                if lookups.get() == 1 {
                    Ok::<_, AppError>(None)
                } else {
                    Ok(Some(42))
                }
            },
            || async { Err(AppError::conflict("Folder already exists")) },
            || AppError::database("missing"),
        )
        .await
        .unwrap();

        assert_eq!(row, 42);
        assert_eq!(lookups.get(), 2);
    }

    #[tokio::test]
    async fn row_gone_again_after_conflict_is_a_database_error() {
        let err = get_or_create_row(
            || async { Ok::<Option<i32>, AppError>(None) },
            || async { Err(AppError::conflict("Folder already exists")) },
            || AppError::database("Folder vanished after insert conflict"),
        )
        .await
        .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Database);
    }

    #[tokio::test]
    async fn non_conflict_create_error_propagates() {
        let err = get_or_create_row(
            || async { Ok::<Option<i32>, AppError>(None) },
            || async { Err(AppError::database("Connection reset")) },
            || AppError::database("missing"),
        )
        .await
        .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Database);
        assert_eq!(err.message, "Connection reset");
    }

    #[tokio::test]
    async fn ensure_inserts_when_absent() {
        let created = ensure_row(
            || async { Ok::<Option<i32>, AppError>(None) },
            || async { Ok(1) },
        )
        .await
        .unwrap();

        assert!(created);
    }

    #[tokio::test]
    async fn ensure_leaves_existing_row_alone() {
        let created_flag = Cell::new(false);

        let created = ensure_row(
            || async { Ok::<_, AppError>(Some(1)) },
            || async {
                created_flag.set(true);
                Ok(1)
            },
        )
        .await
        .unwrap();

        assert!(!created);
        assert!(!created_flag.get());
    }

    #[tokio::test]
    async fn lost_insert_race_counts_as_already_present() {
        let created = ensure_row(
            || async { Ok::<Option<i32>, AppError>(None) },
            || async { Err(AppError::conflict("Movie is already in this folder")) },
        )
        .await
        .unwrap();

        assert!(!created);
    }

    #[tokio::test]
    async fn ensure_propagates_non_conflict_errors() {
        let err = ensure_row(
            || async { Ok::<Option<i32>, AppError>(None) },
            || async { Err(AppError::database("Connection reset")) },
        )
        .await
        .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Database);
    }
}
