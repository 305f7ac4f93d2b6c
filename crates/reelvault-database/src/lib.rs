//! # reelvault-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all ReelVault entities, including the storage-seam
//! trait implementations the reconciliation engine runs against.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
