//! Movie entity model and request DTOs.

use ensemble_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub release_date: Timestamp,
}

/// DTO for creating a movie. Title and release date are both mandatory.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1))]
    pub title: String,
    pub release_date: Timestamp,
}

/// DTO for partially updating a movie. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMovie {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub release_date: Option<Timestamp>,
}

impl UpdateMovie {
    /// True when the body names no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.release_date.is_none()
    }
}
