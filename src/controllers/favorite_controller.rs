use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::controllers::scale_meal;
use crate::error::{MealBotError, Result};
use crate::models::{
    DietaryRestriction, FavoriteMealIngredientRecord, FavoriteMealRecord, Meal, MealRequest,
    NutritionalInfo, TimeConstraint,
};

/// Save a meal as a favorite. Saving an already-saved meal updates its name
/// and current servings.
pub async fn save_favorite(pool: &SqlitePool, meal: &Meal) -> Result<()> {
    // Start a transaction
    let mut tx = pool.begin().await?;

    let restrictions = meal
        .dietary_restrictions
        .iter()
        .map(DietaryRestriction::as_str)
        .collect::<Vec<_>>()
        .join(",");

    // Insert or update the meal row. Quantities are stored at baseline and rescaled on load
    sqlx::query(
        r#"
        INSERT INTO favorite_meals (
            id, name, instructions, prep_time, servings, original_servings, current_servings,
            calories, protein, carbs, fat, fiber, dietary_restrictions
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            current_servings = excluded.current_servings
        "#,
    )
    .bind(&meal.id)
    .bind(&meal.name)
    .bind(&meal.instructions)
    .bind(&meal.prep_time)
    .bind(i64::from(meal.servings))
    .bind(i64::from(meal.original_servings))
    .bind(i64::from(meal.current_servings))
    .bind(&meal.original_nutritional_info.calories)
    .bind(&meal.original_nutritional_info.protein)
    .bind(&meal.original_nutritional_info.carbs)
    .bind(&meal.original_nutritional_info.fat)
    .bind(&meal.original_nutritional_info.fiber)
    .bind(&restrictions)
    .execute(&mut *tx)
    .await?;

    // Replace the ingredient rows
    sqlx::query("DELETE FROM favorite_meal_ingredients WHERE meal_id = ?")
        .bind(&meal.id)
        .execute(&mut *tx)
        .await?;

    for (position, ingredient) in meal.original_ingredients.iter().enumerate() {
        sqlx::query(
            "INSERT INTO favorite_meal_ingredients (meal_id, position, ingredient) VALUES (?, ?, ?)",
        )
        .bind(&meal.id)
        .bind(position as i64)
        .bind(ingredient)
        .execute(&mut *tx)
        .await?;
    }

    // Commit the transaction
    tx.commit().await?;

    info!(meal_id = %meal.id, name = %meal.name, "saved favorite meal");
    Ok(())
}

/// Remove a favorite by id
pub async fn remove_favorite(pool: &SqlitePool, meal_id: &str) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM favorite_meal_ingredients WHERE meal_id = ?")
        .bind(meal_id)
        .execute(&mut *tx)
        .await?;

    let removed = sqlx::query("DELETE FROM favorite_meals WHERE id = ?")
        .bind(meal_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if removed == 0 {
        return Err(MealBotError::MealNotFound(meal_id.to_string()));
    }

    tx.commit().await?;

    info!(meal_id, "removed favorite meal");
    Ok(())
}

pub async fn is_favorite(pool: &SqlitePool, meal_id: &str) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorite_meals WHERE id = ?")
        .bind(meal_id)
        .fetch_one(pool)
        .await?;

    Ok(count > 0)
}

/// Save the meal if it is not a favorite yet, otherwise remove it.
/// Returns whether the meal is saved afterwards.
pub async fn toggle_favorite(pool: &SqlitePool, meal: &Meal) -> Result<bool> {
    if is_favorite(pool, &meal.id).await? {
        remove_favorite(pool, &meal.id).await?;
        Ok(false)
    } else {
        save_favorite(pool, meal).await?;
        Ok(true)
    }
}

/// Fetch a favorite by id, rescaled to the servings it was saved at
pub async fn get_favorite(pool: &SqlitePool, meal_id: &str) -> Result<Meal> {
    // Fetch the meal row
    let record = sqlx::query_as::<_, FavoriteMealRecord>(
        r#"
        SELECT id, name, instructions, prep_time, servings, original_servings, current_servings,
               calories, protein, carbs, fat, fiber, dietary_restrictions, created_at
        FROM favorite_meals
        WHERE id = ?
        "#,
    )
    .bind(meal_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| MealBotError::MealNotFound(meal_id.to_string()))?;

    // Fetch its ingredients in order
    let ingredients = sqlx::query_as::<_, FavoriteMealIngredientRecord>(
        r#"
        SELECT id, meal_id, position, ingredient, created_at
        FROM favorite_meal_ingredients
        WHERE meal_id = ?
        ORDER BY position
        "#,
    )
    .bind(meal_id)
    .fetch_all(pool)
    .await?;

    Ok(into_meal(record, ingredients))
}

/// All favorites in the order they were first saved
pub async fn get_all_favorites(pool: &SqlitePool) -> Result<Vec<Meal>> {
    let ids: Vec<String> =
        sqlx::query_scalar("SELECT id FROM favorite_meals ORDER BY created_at, rowid")
            .fetch_all(pool)
            .await?;

    let mut meals = Vec::with_capacity(ids.len());
    for id in ids {
        meals.push(get_favorite(pool, &id).await?);
    }

    Ok(meals)
}

fn into_meal(record: FavoriteMealRecord, ingredients: Vec<FavoriteMealIngredientRecord>) -> Meal {
    let restrictions = record
        .dietary_restrictions
        .split(',')
        .filter(|tag| !tag.is_empty())
        .filter_map(|tag| match tag.parse::<DietaryRestriction>() {
            Ok(restriction) => Some(restriction),
            Err(e) => {
                warn!(meal_id = %record.id, error = %e, "skipping stored restriction");
                None
            }
        });
    let request = MealRequest::new(TimeConstraint::default(), restrictions);

    let mut meal = Meal::with_id(
        record.id,
        record.name,
        ingredients.into_iter().map(|i| i.ingredient).collect(),
        record.instructions,
        NutritionalInfo {
            calories: record.calories,
            protein: record.protein,
            carbs: record.carbs,
            fat: record.fat,
            fiber: record.fiber,
        },
        &request,
    );
    meal.prep_time = record.prep_time;
    meal.servings = to_servings(record.servings, meal.servings);
    meal.original_servings = to_servings(record.original_servings, meal.original_servings);
    meal.current_servings = meal.original_servings;
    meal.is_favorite = true;

    let current = to_servings(record.current_servings, meal.original_servings);
    if current != meal.original_servings {
        meal = scale_meal(&meal, current);
    }

    meal
}

fn to_servings(stored: i64, fallback: u32) -> u32 {
    u32::try_from(stored).ok().filter(|n| *n > 0).unwrap_or(fallback)
}
