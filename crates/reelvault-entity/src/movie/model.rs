//! Movie entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use reelvault_core::error::AppError;
use reelvault_core::traits::MovieRecord;

/// A movie in a user's personal catalog.
///
/// The `genre` field is free text and may hold several genres separated by
/// commas, slashes, or pipes (e.g. `"Sci-Fi/Drama"`). The reconciliation
/// engine reads it but never rewrites it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Movie {
    /// Unique movie identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// Movie title.
    pub title: String,
    /// Raw genre text as entered by the user.
    pub genre: String,
    /// Release year.
    pub release_year: i32,
    /// Path to the uploaded poster image, if any.
    pub poster_path: Option<String>,
    /// When the movie was added to the catalog.
    pub created_at: DateTime<Utc>,
}

impl Movie {
    /// The slice of this row the reconciliation engine works with.
    pub fn to_record(&self) -> MovieRecord {
        MovieRecord {
            id: self.id,
            user_id: self.user_id,
            genre: self.genre.clone(),
        }
    }
}

/// Data required to create a new movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMovie {
    /// The owning user.
    pub user_id: Uuid,
    /// Movie title.
    pub title: String,
    /// Raw genre text.
    pub genre: String,
    /// Release year.
    pub release_year: i32,
    /// Path to the uploaded poster image, if any.
    pub poster_path: Option<String>,
}

impl CreateMovie {
    /// Validate the creation payload.
    ///
    /// Title and genre must be non-empty and the release year a
    /// four-digit year between 1900 and 2099.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        if self.genre.trim().is_empty() {
            return Err(AppError::validation("Genre is required"));
        }
        if !(1900..=2099).contains(&self.release_year) {
            return Err(AppError::validation("Invalid release year"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> CreateMovie {
        CreateMovie {
            user_id: Uuid::new_v4(),
            title: "Solaris".to_string(),
            genre: "Sci-Fi/Drama".to_string(),
            release_year: 1972,
            poster_path: None,
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn blank_title_rejected() {
        let mut movie = payload();
        movie.title = "   ".to_string();
        assert!(movie.validate().is_err());
    }

    #[test]
    fn blank_genre_rejected() {
        let mut movie = payload();
        movie.genre = String::new();
        assert!(movie.validate().is_err());
    }

    #[test]
    fn out_of_range_year_rejected() {
        let mut movie = payload();
        movie.release_year = 1899;
        assert!(movie.validate().is_err());
        movie.release_year = 2100;
        assert!(movie.validate().is_err());
    }
}
