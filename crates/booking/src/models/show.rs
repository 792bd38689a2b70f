//! Show entity model, the booking DTO, and the joined rows the listing and
//! detail pages are built from.

use ensemble_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
}

/// DTO for booking a show. The referenced venue and artist must exist.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateShow {
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
}

/// A show as it appears on a venue page: who plays, and when.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueShow {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A show as it appears on an artist page: where they play, and when.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistShow {
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// One row of the full show listing, joined against both sides.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}
