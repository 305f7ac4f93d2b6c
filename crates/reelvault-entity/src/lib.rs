//! # reelvault-entity
//!
//! Domain entity models for ReelVault. Every struct in this crate
//! represents a database table row or a creation payload. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and table rows
//! additionally derive `sqlx::FromRow`.

pub mod folder;
pub mod membership;
pub mod movie;
pub mod user;
