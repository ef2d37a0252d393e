use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::{Meal, NutritionalInfo};

/// `<amount><unit> <rest>`, e.g. `2 cups rice` or `500g pasta`
static INGREDIENT_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9.]+)\s*([A-Za-z0-9_]+)\s+(.+)$").expect("valid regex"));

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-+]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][-+]?[0-9]+)?")
        .expect("valid regex")
});

/// Rescale a meal to `servings` (at least 1).
///
/// Quantities are always recomputed from the meal's baseline with the ratio
/// `servings / original_servings`, so repeated scaling does not drift.
pub fn scale_meal(meal: &Meal, servings: u32) -> Meal {
    let servings = servings.max(1);
    let ratio = f64::from(servings) / f64::from(meal.original_servings.max(1));

    debug!(
        meal_id = %meal.id,
        from = meal.current_servings,
        to = servings,
        ratio,
        "scaling meal"
    );

    Meal {
        current_servings: servings,
        ingredients: meal
            .original_ingredients
            .iter()
            .map(|ingredient| scale_ingredient(ingredient, ratio))
            .collect(),
        nutritional_info: scale_nutrition(&meal.original_nutritional_info, ratio),
        ..meal.clone()
    }
}

/// Lines without a leading amount and unit are returned unchanged.
pub fn scale_ingredient(ingredient: &str, ratio: f64) -> String {
    let Some(caps) = INGREDIENT_AMOUNT.captures(ingredient) else {
        return ingredient.to_string();
    };

    let Some(amount) = leading_number(&caps[1]) else {
        return ingredient.to_string();
    };

    format!("{} {} {}", to_fixed_1(amount * ratio), &caps[2], &caps[3])
}

/// Every field comes back as a rounded integer with a `g` suffix, calories included.
pub fn scale_nutrition(info: &NutritionalInfo, ratio: f64) -> NutritionalInfo {
    info.map_fields(|field| {
        let magnitude = leading_number(field).unwrap_or(0.0);
        format!("{}g", round_half_up(magnitude * ratio) as i64)
    })
}

/// The numeric prefix of `text`, ignoring whatever follows it
pub fn leading_number(text: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(text)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

// Half-up on the binary value after scaling by ten, so a product stored as
// 0.15 renders as 0.2. This is intended and differs from `toFixed`.
fn to_fixed_1(value: f64) -> String {
    format!("{:.1}", round_half_up(value * 10.0) / 10.0)
}
