//! Venue entity model, request DTOs, and the listing/search row shapes.

use ensemble_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::show::VenueShow;

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a venue. Name, city, state, and address are mandatory.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVenue {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(length(min = 1))]
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// DTO for partially updating a venue. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateVenue {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub city: Option<String>,
    #[validate(length(min = 1))]
    pub state: Option<String>,
    #[validate(length(min = 1))]
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Option<Vec<String>>,
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<String>,
}

/// A venue as it appears under an area heading or in search results.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// One row of the area listing query: a venue summary tagged with its area.
#[derive(Debug, Clone, FromRow)]
pub struct VenueAreaRow {
    pub city: String,
    pub state: String,
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Venues grouped under one (city, state) pair.
#[derive(Debug, Clone, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// A venue detail page: the full record plus its shows split around now.
#[derive(Debug, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}
