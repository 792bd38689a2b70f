//! Repository for the `actors` table.

use ensemble_core::types::DbId;
use sqlx::PgPool;

use crate::models::actor::{Actor, CreateActor, UpdateActor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, gender";

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateActor) -> Result<Actor, sqlx::Error> {
        let query = format!(
            "INSERT INTO actors (name, age, gender)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.gender)
            .fetch_one(pool)
            .await
    }

    /// All actors ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY id");
        sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await
    }

    /// Find an actor by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update an actor. Returns `None` if it does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActor,
    ) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!(
            "UPDATE actors SET
                name = COALESCE($2, name),
                age = COALESCE($3, age),
                gender = COALESCE($4, gender)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.gender)
            .fetch_optional(pool)
            .await
    }

    /// Delete an actor by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
