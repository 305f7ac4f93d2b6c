//! User entity model.
//!
//! Accounts are owned by the external registration/authentication flows;
//! this model exists because movies and folders carry foreign keys to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
