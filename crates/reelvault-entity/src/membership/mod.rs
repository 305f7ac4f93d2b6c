//! Folder membership domain entities.

pub mod model;

pub use model::Membership;
