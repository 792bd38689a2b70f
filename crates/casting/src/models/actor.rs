//! Actor entity model and request DTOs.

use ensemble_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `actors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// DTO for creating an actor. Name, age and gender are all mandatory.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActor {
    #[validate(length(min = 1))]
    pub name: String,
    pub age: i32,
    #[validate(length(min = 1))]
    pub gender: String,
}

/// DTO for partially updating an actor. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateActor {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub age: Option<i32>,
    #[validate(length(min = 1))]
    pub gender: Option<String>,
}

impl UpdateActor {
    /// True when the body names no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.gender.is_none()
    }
}
