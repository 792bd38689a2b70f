//! Drink entity model, its two wire representations, and request DTOs.

use ensemble_core::types::DbId;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// One ingredient layer of a drink's recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: i32,
}

/// A row from the `drinks` table. The recipe is stored as JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct Drink {
    pub id: DbId,
    pub title: String,
    pub recipe: Json<Vec<Ingredient>>,
}

impl Drink {
    /// Long form: the full recipe, ingredient names included.
    pub fn long(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "title": self.title,
            "recipe": self.recipe.0,
        })
    }

    /// Short form: the public menu shows colors and proportions but
    /// withholds ingredient names.
    pub fn short(&self) -> serde_json::Value {
        let recipe: Vec<_> = self
            .recipe
            .0
            .iter()
            .map(|ingredient| {
                json!({
                    "color": ingredient.color,
                    "parts": ingredient.parts,
                })
            })
            .collect();
        json!({
            "id": self.id,
            "title": self.title,
            "recipe": recipe,
        })
    }
}

/// Recipe field of a create or update body.
///
/// Clients send either a bare ingredient object or an array of them; both
/// are accepted and normalized to the array form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    One(Ingredient),
    Many(Vec<Ingredient>),
}

impl RecipeInput {
    /// Normalize to the stored array form.
    pub fn into_ingredients(self) -> Vec<Ingredient> {
        match self {
            RecipeInput::One(ingredient) => vec![ingredient],
            RecipeInput::Many(ingredients) => ingredients,
        }
    }
}

/// DTO for creating a drink. Title and recipe are both mandatory.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDrink {
    #[validate(length(min = 1))]
    pub title: String,
    pub recipe: RecipeInput,
}

/// DTO for partially updating a drink. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDrink {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub recipe: Option<RecipeInput>,
}
