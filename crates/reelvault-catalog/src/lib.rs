//! # reelvault-catalog
//!
//! The catalog reconciliation engine: keeps a user's genre folders
//! consistent with the free-text genre field on each movie.
//!
//! The engine is invoked from two independent call sites — a full sweep on
//! dashboard load and an inline pass right after a movie is created — and
//! converges both to the same steady state. It only ever adds rows: it
//! never deletes folders, never removes stale memberships, and never
//! merges folders.
//!
//! Dependencies are injected as `Arc` trait objects (the seam traits in
//! `reelvault-core`), so tests drive the engine with in-memory stores.

pub mod reconciler;
pub mod tokenizer;

pub use reconciler::{ReconcileOutcome, Reconciler, SweepOutcome};
pub use tokenizer::tokenize;
