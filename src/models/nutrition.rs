use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-meal nutrition as display strings: a magnitude followed by a unit suffix.
///
/// Calories are unitless when parsed; every other field carries a `g` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub fiber: String,
}

impl Default for NutritionalInfo {
    fn default() -> Self {
        Self {
            calories: "0".to_string(),
            protein: "0g".to_string(),
            carbs: "0g".to_string(),
            fat: "0g".to_string(),
            fiber: "0g".to_string(),
        }
    }
}

impl NutritionalInfo {
    /// Apply `f` to every field, in declaration order.
    pub fn map_fields<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        Self {
            calories: f(&self.calories),
            protein: f(&self.protein),
            carbs: f(&self.carbs),
            fat: f(&self.fat),
            fiber: f(&self.fiber),
        }
    }
}

impl fmt::Display for NutritionalInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Calories: {} | Protein: {} | Carbs: {} | Fat: {} | Fiber: {}",
            self.calories, self.protein, self.carbs, self.fat, self.fiber
        )
    }
}
