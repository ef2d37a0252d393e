mod envelope;
mod favorite_controller;
mod ingredient_classifier;
mod response_parser;
mod serving_scaler;
mod shopping_list_controller;
mod support_parser;

pub use envelope::extract_candidate_text;
pub use favorite_controller::{
    get_all_favorites, get_favorite, is_favorite, remove_favorite, save_favorite, toggle_favorite,
};
pub use ingredient_classifier::classify_ingredient;
pub use response_parser::{LineKind, Section, classify_line, parse_meal_response};
pub use serving_scaler::{leading_number, scale_ingredient, scale_meal, scale_nutrition};
pub use shopping_list_controller::{
    build_shopping_list, export_shopping_list, remove_shopping_list, set_item_checked,
    toggle_item_check,
};
pub use support_parser::parse_support_response;
