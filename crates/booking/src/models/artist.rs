//! Artist entity model and request DTOs. Mirrors the venue shapes minus the
//! street address, which only venues carry.

use ensemble_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::show::ArtistShow;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating an artist. Name, city, and state are mandatory.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArtist {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// DTO for partially updating an artist. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateArtist {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub city: Option<String>,
    #[validate(length(min = 1))]
    pub state: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Option<Vec<String>>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
}

/// Minimal row for the artist index.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistRef {
    pub id: DbId,
    pub name: String,
}

/// An artist as it appears in search results.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// An artist detail page: the full record plus its shows split around now.
#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}
