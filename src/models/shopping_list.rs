use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::grocery::{GroceryCategory, GroceryItem};

/// A checkable list built from one meal's ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub items: Vec<GroceryItem>,
    /// Id of the meal the list was built from
    pub recipe_id: String,
    /// Meal name at the time the list was built
    pub recipe_name: String,
}

impl ShoppingList {
    /// Items grouped by category in display order. Empty categories are left out.
    pub fn items_by_category(&self) -> IndexMap<GroceryCategory, Vec<&GroceryItem>> {
        let mut groups = IndexMap::new();

        for category in GroceryCategory::DISPLAY_ORDER {
            let items: Vec<&GroceryItem> = self
                .items
                .iter()
                .filter(|item| item.category == category)
                .collect();

            if !items.is_empty() {
                groups.insert(category, items);
            }
        }

        groups
    }

    /// Plain-text export, one paragraph per non-empty category
    pub fn export_text(&self) -> String {
        let sections = self
            .items_by_category()
            .iter()
            .map(|(category, items)| {
                let lines = items
                    .iter()
                    .map(|item| format!("- {}", item.name))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("{}:\n{}\n", category, lines)
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("Shopping List for {}\n\n{}", self.recipe_name, sections)
    }

    /// File name for the export. Characters that cannot appear in a file
    /// name, path separators included, become `-`.
    pub fn export_file_name(&self) -> String {
        let safe_name: String = self
            .recipe_name
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
                c if c.is_control() => '-',
                c => c,
            })
            .collect();

        format!("shopping-list-{}.txt", safe_name)
    }
}
