//! Repository for the `shows` table and its joins against venues and artists.

use ensemble_core::types::DbId;
use sqlx::PgPool;

use crate::models::show::{ArtistShow, CreateShow, Show, ShowListing, VenueShow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, venue_id, artist_id, start_time";

/// Which side of now a page wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowWindow {
    Past,
    Upcoming,
}

impl ShowWindow {
    /// SQL comparison putting every show in exactly one window.
    fn comparison(self) -> &'static str {
        match self {
            ShowWindow::Past => "<=",
            ShowWindow::Upcoming => ">",
        }
    }
}

/// Provides booking and listing operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show, returning the created row.
    ///
    /// An unknown venue or artist id trips the FK constraint; the caller
    /// surfaces that as an unprocessable request.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (venue_id, artist_id, start_time)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(input.venue_id)
            .bind(input.artist_id)
            .bind(input.start_time)
            .fetch_one(pool)
            .await
    }

    /// Every show with venue and artist names joined in, soonest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.id, s.venue_id, v.name AS venue_name,
                    s.artist_id, a.name AS artist_name,
                    a.image_link AS artist_image_link, s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             JOIN artists a ON a.id = s.artist_id
             ORDER BY s.start_time, s.id",
        )
        .fetch_all(pool)
        .await
    }

    /// The venue's shows in one window, each with the booked artist joined in.
    pub async fn for_venue(
        pool: &PgPool,
        venue_id: DbId,
        window: ShowWindow,
    ) -> Result<Vec<VenueShow>, sqlx::Error> {
        let comparison = window.comparison();
        let query = format!(
            "SELECT s.artist_id, a.name AS artist_name,
                    a.image_link AS artist_image_link, s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1 AND s.start_time {comparison} NOW()
             ORDER BY s.start_time, s.id"
        );
        sqlx::query_as::<_, VenueShow>(&query)
            .bind(venue_id)
            .fetch_all(pool)
            .await
    }

    /// The artist's shows in one window, each with the hosting venue joined in.
    pub async fn for_artist(
        pool: &PgPool,
        artist_id: DbId,
        window: ShowWindow,
    ) -> Result<Vec<ArtistShow>, sqlx::Error> {
        let comparison = window.comparison();
        let query = format!(
            "SELECT s.venue_id, v.name AS venue_name,
                    v.image_link AS venue_image_link, s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1 AND s.start_time {comparison} NOW()
             ORDER BY s.start_time, s.id"
        );
        sqlx::query_as::<_, ArtistShow>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }
}
