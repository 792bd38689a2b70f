//! Repository for the `categories` table.

use ensemble_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;

/// Provides read operations for trivia categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, kind FROM categories ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Find a category by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, kind FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
