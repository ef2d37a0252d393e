use std::fmt;

use serde::{Deserialize, Serialize};

/// Shopping categories, declared in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroceryCategory {
    Produce,
    #[serde(rename = "Meat & Seafood")]
    MeatAndSeafood,
    Dairy,
    Pantry,
    Spices,
    Other,
}

impl GroceryCategory {
    pub const DISPLAY_ORDER: [GroceryCategory; 6] = [
        GroceryCategory::Produce,
        GroceryCategory::MeatAndSeafood,
        GroceryCategory::Dairy,
        GroceryCategory::Pantry,
        GroceryCategory::Spices,
        GroceryCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroceryCategory::Produce => "Produce",
            GroceryCategory::MeatAndSeafood => "Meat & Seafood",
            GroceryCategory::Dairy => "Dairy",
            GroceryCategory::Pantry => "Pantry",
            GroceryCategory::Spices => "Spices",
            GroceryCategory::Other => "Other",
        }
    }
}

impl fmt::Display for GroceryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub name: String,
    pub category: GroceryCategory,
    pub checked: bool,
}

impl GroceryItem {
    pub fn new(name: String, category: GroceryCategory) -> Self {
        Self {
            name,
            category,
            checked: false,
        }
    }
}
