use mealbot::controllers::{
    build_shopping_list, extract_candidate_text, get_all_favorites, get_favorite,
    parse_meal_response, save_favorite, scale_meal, toggle_favorite, toggle_item_check,
};
use mealbot::models::{DietaryRestriction, GroceryCategory, MealRequest, TimeConstraint};
use mealbot::session::MealSession;
use sqlx::sqlite::SqlitePoolOptions;

const STIR_FRY_RESPONSE: &str = r#"Here's a quick and healthy idea!

**Name:** Garlic Shrimp Stir-Fry

**Ingredients:**
* 200 g shrimp, peeled
* 2 cloves garlic, minced
* 1 cup broccoli florets
* 2 tbsp soy sauce
* 1 tsp chili powder
* 1 cup cooked rice

**Instructions:**
1. Heat a wok over high heat.
2. Stir-fry garlic and shrimp for 3 minutes.
3. Add broccoli and soy sauce, cook 4 more minutes.

**Nutritional Information (per serving):**
* Calories: 420 - 450
* Protein: 32 - 35g
* Carbohydrates: 48
* Fat: 9g
* Fiber: 4g
"#;

#[test]
fn test_parse_scale_and_export_roundtrip() {
    let request = MealRequest::new(TimeConstraint::FifteenMinutes, [DietaryRestriction::DairyFree]);
    let meal = parse_meal_response(STIR_FRY_RESPONSE, &request);

    assert_eq!(meal.name, "Garlic Shrimp Stir-Fry");
    assert_eq!(
        meal.ingredients,
        vec![
            "200 g shrimp, peeled",
            "2 cloves garlic, minced",
            "1 cup broccoli florets",
            "2 tbsp soy sauce",
            "1 tsp chili powder",
            "1 cup cooked rice",
        ]
    );
    assert_eq!(
        meal.instructions,
        "1. Heat a wok over high heat.\n2. Stir-fry garlic and shrimp for 3 minutes.\n3. Add broccoli and soy sauce, cook 4 more minutes."
    );
    assert_eq!(meal.nutritional_info.calories, "420");
    assert_eq!(meal.nutritional_info.protein, "32g");
    assert_eq!(meal.nutritional_info.carbs, "48g");
    assert_eq!(meal.nutritional_info.fat, "0g");
    assert_eq!(meal.nutritional_info.fiber, "0g");
    assert_eq!(meal.prep_time, "15 minutes");

    let scaled = scale_meal(&meal, 6);
    assert_eq!(scaled.current_servings, 6);
    assert_eq!(scaled.original_servings, 4);
    assert_eq!(scaled.ingredients[0], "300.0 g shrimp, peeled");
    assert_eq!(scaled.ingredients[1], "3.0 cloves garlic, minced");
    assert_eq!(scaled.nutritional_info.calories, "630g");
    assert_eq!(scaled.nutritional_info.protein, "48g");

    let list = build_shopping_list(&scaled);
    let categories: Vec<GroceryCategory> = list.items.iter().map(|item| item.category).collect();
    assert_eq!(
        categories,
        vec![
            GroceryCategory::MeatAndSeafood,
            GroceryCategory::Produce,
            GroceryCategory::Other,
            GroceryCategory::Pantry,
            GroceryCategory::Spices,
            GroceryCategory::Pantry,
        ]
    );

    assert_eq!(
        list.export_text(),
        "Shopping List for Garlic Shrimp Stir-Fry\n\n\
         Produce:\n- 3.0 cloves garlic, minced\n\n\
         Meat & Seafood:\n- 300.0 g shrimp, peeled\n\n\
         Pantry:\n- 3.0 tbsp soy sauce\n- 1.5 cup cooked rice\n\n\
         Spices:\n- 1.5 tsp chili powder\n\n\
         Other:\n- 1.5 cup broccoli florets\n"
    );
}

#[test]
fn test_envelope_to_meal() {
    let body = serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": STIR_FRY_RESPONSE }], "role": "model" }
        }]
    })
    .to_string();

    let text = extract_candidate_text(&body).expect("Failed to extract candidate text");
    let meal = parse_meal_response(&text, &MealRequest::default());

    assert_eq!(meal.name, "Garlic Shrimp Stir-Fry");
    assert_eq!(meal.ingredients.len(), 6);
}

#[test]
fn test_session_lists_are_independent() {
    let session = MealSession::new()
        .with_suggestion(STIR_FRY_RESPONSE, &MealRequest::default())
        .with_shopping_list()
        .with_servings(8)
        .with_shopping_list();

    let mut lists = session.shopping_lists;
    toggle_item_check(&mut lists, 0, 0).expect("Failed to toggle");

    assert!(lists[0].items[0].checked);
    assert!(!lists[1].items[0].checked);
    assert_eq!(lists[0].items[0].name, "200 g shrimp, peeled");
    assert_eq!(lists[1].items[0].name, "400.0 g shrimp, peeled");
    assert_eq!(lists[0].recipe_id, lists[1].recipe_id);
}

#[tokio::test]
async fn test_favorites_roundtrip() {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let first = parse_meal_response(STIR_FRY_RESPONSE, &MealRequest::default());
    let second = parse_meal_response(
        "Name: Overnight Oats\nIngredients:\n- 1 cup oats\n- 1 cup milk",
        &MealRequest::new(TimeConstraint::ThirtyMinutes, [DietaryRestriction::Vegetarian]),
    );

    save_favorite(&pool, &scale_meal(&first, 2))
        .await
        .expect("Failed to save first favorite");
    assert!(
        toggle_favorite(&pool, &second)
            .await
            .expect("Failed to toggle second favorite")
    );

    let favorites = get_all_favorites(&pool)
        .await
        .expect("Failed to list favorites");

    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites[0].name, "Garlic Shrimp Stir-Fry");
    assert_eq!(favorites[0].current_servings, 2);
    assert_eq!(favorites[0].ingredients[0], "100.0 g shrimp, peeled");
    assert_eq!(favorites[1].name, "Overnight Oats");
    assert!(favorites.iter().all(|meal| meal.is_favorite));

    let oats = get_favorite(&pool, &second.id)
        .await
        .expect("Failed to fetch favorite");
    assert_eq!(oats.dietary_restrictions, vec![DietaryRestriction::Vegetarian]);
    assert_eq!(oats.prep_time, "30 minutes");
}
