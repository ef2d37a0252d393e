use sqlx::prelude::FromRow;

/// Row of `favorite_meals`. Quantities are stored at baseline servings.
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteMealRecord {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub prep_time: String,
    pub servings: i64,
    pub original_servings: i64,
    pub current_servings: i64,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub fiber: String,
    /// Comma-separated restriction tags, in selection order
    pub dietary_restrictions: String,
    pub created_at: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct FavoriteMealIngredientRecord {
    pub id: i64,
    pub meal_id: String,
    pub position: i64,
    pub ingredient: String,
    pub created_at: String,
}
