mod favorite;
mod grocery;
mod meal;
mod nutrition;
mod request;
mod shopping_list;
mod support;

#[cfg(test)]
pub mod test_fixtures;

pub use favorite::{FavoriteMealIngredientRecord, FavoriteMealRecord};
pub use grocery::{GroceryCategory, GroceryItem};
pub use meal::{BASELINE_SERVINGS, DEFAULT_MEAL_NAME, DISPLAY_SERVINGS, Meal};
pub use nutrition::NutritionalInfo;
pub use request::{DietaryRestriction, MealRequest, TimeConstraint};
pub use shopping_list::ShoppingList;
pub use support::{EmotionalState, SupportResponse};
