//! Movie domain entities.

pub mod model;

pub use model::{CreateMovie, Movie};
