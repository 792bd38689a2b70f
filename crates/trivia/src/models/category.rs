//! Category entity model.

use ensemble_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
///
/// The column is named `kind` to stay clear of the keyword, but the wire
/// format established by the frontend says `type`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    #[serde(rename = "type")]
    pub kind: String,
}
