//! Application state as an explicit value.
//!
//! Each user action consumes the current `MealSession` and returns the next
//! one. Superseding a stale suggestion is the caller's job: whichever
//! `with_suggestion` result it keeps is the current meal.

use crate::controllers::{build_shopping_list, parse_meal_response, scale_meal, toggle_item_check};
use crate::error::Result;
use crate::models::{Meal, MealRequest, ShoppingList};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealSession {
    pub current_meal: Option<Meal>,
    pub shopping_lists: Vec<ShoppingList>,
}

impl MealSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current meal with one parsed from a fresh model response
    pub fn with_suggestion(self, raw: &str, request: &MealRequest) -> Self {
        Self {
            current_meal: Some(parse_meal_response(raw, request)),
            ..self
        }
    }

    /// Make a saved meal the current one
    pub fn with_meal(self, meal: Meal) -> Self {
        Self {
            current_meal: Some(meal),
            ..self
        }
    }

    /// Rescale the current meal. No-op without one.
    pub fn with_servings(self, servings: u32) -> Self {
        let current_meal = self
            .current_meal
            .as_ref()
            .map(|meal| scale_meal(meal, servings));

        Self {
            current_meal,
            ..self
        }
    }

    /// Append a shopping list for the current meal. No-op without one.
    pub fn with_shopping_list(mut self) -> Self {
        if let Some(meal) = &self.current_meal {
            self.shopping_lists.push(build_shopping_list(meal));
        }
        self
    }

    /// Toggle one list item. The session comes back either way; on a bad
    /// index it is unchanged and the error says why.
    pub fn with_item_toggled(mut self, list_index: usize, item_index: usize) -> (Self, Result<()>) {
        let outcome = toggle_item_check(&mut self.shopping_lists, list_index, item_index);
        (self, outcome)
    }
}
