//! Trait definitions shared across the ReelVault workspace.

pub mod catalog;

pub use catalog::{FolderDirectory, MembershipLedger, MovieCatalog, MovieRecord};
