//! # reelvault-core
//!
//! Core crate for ReelVault. Contains the storage-seam traits used by the
//! catalog reconciliation engine, configuration schemas, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other ReelVault crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
