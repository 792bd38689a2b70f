//! Repository for the `venues` table.

use ensemble_core::types::DbId;
use sqlx::PgPool;

use crate::models::venue::{CreateVenue, UpdateVenue, Venue, VenueAreaRow, VenueSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
                       website_link, genres, seeking_talent, seeking_description, created_at";

/// Counts the venue's shows that have not happened yet.
const UPCOMING_COUNT: &str =
    "(SELECT COUNT(*) FROM shows s WHERE s.venue_id = v.id AND s.start_time > NOW())";

/// Provides CRUD, area listing, and search operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, city, state, address, phone, image_link,
                                 facebook_link, website_link, genres, seeking_talent,
                                 seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(&input.genres)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    /// Find a venue by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a venue. Returns `None` if it does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET
                name = COALESCE($2, name),
                city = COALESCE($3, city),
                state = COALESCE($4, state),
                address = COALESCE($5, address),
                phone = COALESCE($6, phone),
                image_link = COALESCE($7, image_link),
                facebook_link = COALESCE($8, facebook_link),
                website_link = COALESCE($9, website_link),
                genres = COALESCE($10, genres),
                seeking_talent = COALESCE($11, seeking_talent),
                seeking_description = COALESCE($12, seeking_description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(&input.genres)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a venue by id. Returns `true` if a row was removed.
    ///
    /// Shows booked at the venue go with it via the FK cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Every venue with its area and upcoming-show count, ordered so that
    /// rows of the same (city, state) pair are adjacent.
    pub async fn list_area_rows(pool: &PgPool) -> Result<Vec<VenueAreaRow>, sqlx::Error> {
        let query = format!(
            "SELECT v.city, v.state, v.id, v.name, {UPCOMING_COUNT} AS num_upcoming_shows
             FROM venues v
             ORDER BY v.city, v.state, v.id"
        );
        sqlx::query_as::<_, VenueAreaRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the venue name.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "SELECT v.id, v.name, {UPCOMING_COUNT} AS num_upcoming_shows
             FROM venues v
             WHERE v.name ILIKE $1
             ORDER BY v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(format!("%{term}%"))
            .fetch_all(pool)
            .await
    }
}
