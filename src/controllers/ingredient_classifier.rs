use std::sync::LazyLock;

use regex::Regex;

use crate::models::GroceryCategory;

/// Keyword patterns in match priority order. The first match wins, so an
/// ingredient naming both a vegetable and a pantry staple lands in Produce.
static CATEGORY_PATTERNS: LazyLock<Vec<(GroceryCategory, Regex)>> = LazyLock::new(|| {
    [
        (
            GroceryCategory::Produce,
            r"lettuce|tomato|onion|garlic|vegetable|carrot|pepper|cucumber|potato",
        ),
        (
            GroceryCategory::MeatAndSeafood,
            r"chicken|beef|fish|shrimp|pork|meat|salmon",
        ),
        (GroceryCategory::Dairy, r"milk|cheese|yogurt|cream|butter"),
        (GroceryCategory::Spices, r"salt|pepper|spice|powder|cumin|paprika"),
        (
            GroceryCategory::Pantry,
            r"flour|rice|pasta|oil|sauce|can|stock|broth",
        ),
    ]
    .into_iter()
    .map(|(category, pattern)| {
        let regex = Regex::new(&format!("(?i){}", pattern)).expect("valid regex");
        (category, regex)
    })
    .collect()
});

/// Assign a shopping category to a free-text ingredient line
pub fn classify_ingredient(ingredient: &str) -> GroceryCategory {
    CATEGORY_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(ingredient))
        .map(|(category, _)| *category)
        .unwrap_or(GroceryCategory::Other)
}
