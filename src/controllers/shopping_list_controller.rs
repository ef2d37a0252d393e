use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::controllers::classify_ingredient;
use crate::error::{MealBotError, Result};
use crate::models::{GroceryItem, Meal, ShoppingList};

/// Build an unchecked, categorized shopping list from a meal's current ingredients
pub fn build_shopping_list(meal: &Meal) -> ShoppingList {
    let items = meal
        .ingredients
        .iter()
        .map(|ingredient| GroceryItem::new(ingredient.clone(), classify_ingredient(ingredient)))
        .collect();

    ShoppingList {
        items,
        recipe_id: meal.id.clone(),
        recipe_name: meal.name.clone(),
    }
}

/// Flip one item's checked state, leaving every other item and list untouched.
/// An out-of-range index is an error and changes nothing.
pub fn toggle_item_check(
    lists: &mut [ShoppingList],
    list_index: usize,
    item_index: usize,
) -> Result<()> {
    update_item(lists, list_index, item_index, |item| item.checked = !item.checked)
}

/// Set one item's checked state. Applying it twice is the same as once.
pub fn set_item_checked(
    lists: &mut [ShoppingList],
    list_index: usize,
    item_index: usize,
    checked: bool,
) -> Result<()> {
    update_item(lists, list_index, item_index, |item| item.checked = checked)
}

/// Drop the list at `list_index`; the others keep their relative order
pub fn remove_shopping_list(lists: &mut Vec<ShoppingList>, list_index: usize) -> Result<()> {
    if list_index >= lists.len() {
        warn!(list_index, "no shopping list to remove");
        return Err(MealBotError::ShoppingListNotFound(list_index));
    }

    lists.remove(list_index);
    Ok(())
}

/// Write the list's text export into `dir`. Returns the path written.
pub async fn export_shopping_list(list: &ShoppingList, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(list.export_file_name());
    tokio::fs::write(&path, list.export_text()).await?;

    info!(path = %path.display(), recipe = %list.recipe_name, "exported shopping list");
    Ok(path)
}

fn update_item<F>(
    lists: &mut [ShoppingList],
    list_index: usize,
    item_index: usize,
    update: F,
) -> Result<()>
where
    F: FnOnce(&mut GroceryItem),
{
    let list = lists.get_mut(list_index).ok_or_else(|| {
        warn!(list_index, "shopping list index out of range");
        MealBotError::ShoppingListNotFound(list_index)
    })?;

    let item = list.items.get_mut(item_index).ok_or_else(|| {
        warn!(list_index, item_index, "shopping list item index out of range");
        MealBotError::ShoppingListItemNotFound {
            list: list_index,
            item: item_index,
        }
    })?;

    update(item);
    Ok(())
}
