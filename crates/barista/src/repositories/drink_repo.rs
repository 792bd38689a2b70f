//! Repository for the `drinks` table.

use ensemble_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::drink::{Drink, Ingredient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, recipe";

/// Provides CRUD operations for drinks.
///
/// The recipe is always handled as the normalized ingredient array; input
/// normalization happens in the handler layer.
pub struct DrinkRepo;

impl DrinkRepo {
    /// Insert a new drink, returning the created row.
    ///
    /// The `title` column is unique, so inserting a duplicate surfaces as a
    /// database constraint error.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        recipe: &[Ingredient],
    ) -> Result<Drink, sqlx::Error> {
        let query = format!(
            "INSERT INTO drinks (title, recipe)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drink>(&query)
            .bind(title)
            .bind(Json(recipe))
            .fetch_one(pool)
            .await
    }

    /// All drinks ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Drink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks ORDER BY id");
        sqlx::query_as::<_, Drink>(&query).fetch_all(pool).await
    }

    /// Find a drink by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Drink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks WHERE id = $1");
        sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a drink. Returns `None` if it does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: Option<&str>,
        recipe: Option<&[Ingredient]>,
    ) -> Result<Option<Drink>, sqlx::Error> {
        let query = format!(
            "UPDATE drinks SET
                title = COALESCE($2, title),
                recipe = COALESCE($3, recipe)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .bind(title)
            .bind(recipe.map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Delete a drink by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
