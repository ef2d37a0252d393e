use rstest::*;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use super::{Meal, MealRequest, NutritionalInfo};

/// Test fixture that creates an in-memory SQLite database with migrations applied
#[fixture]
pub async fn test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// A model response in the shape the suggestion service usually returns
#[fixture]
pub fn greek_salad_response() -> &'static str {
    "Name: Greek Salad\n\
     Ingredients:\n\
     - 1 cup cucumber\n\
     - 2 tbsp olive oil\n\
     Instructions:\n\
     Chop vegetables. Toss with oil.\n\
     Nutritional Information:\n\
     Calories: 350 - 400\n\
     Protein: 10 - 12\n"
}

/// A meal at baseline servings with scalable and unscalable ingredient lines
#[fixture]
pub fn pasta_meal() -> Meal {
    Meal::new(
        "Tomato Pasta".to_string(),
        vec![
            "2 cups rice".to_string(),
            "200 g chicken breast".to_string(),
            "Salt to taste".to_string(),
        ],
        "Cook everything.".to_string(),
        NutritionalInfo {
            calories: "400".to_string(),
            protein: "30g".to_string(),
            carbs: "50g".to_string(),
            fat: "12g".to_string(),
            fiber: "6g".to_string(),
        },
        &MealRequest::default(),
    )
}
