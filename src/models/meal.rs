use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::nutrition::NutritionalInfo;
use super::request::{DietaryRestriction, MealRequest};

/// Title used when the model response carries no name
pub const DEFAULT_MEAL_NAME: &str = "Healthy Meal Suggestion";

/// Servings shown on the meal card
pub const DISPLAY_SERVINGS: u32 = 2;

/// Serving count that parsed quantities are assumed to describe.
/// Independent of `DISPLAY_SERVINGS`.
pub const BASELINE_SERVINGS: u32 = 4;

/// A structured meal suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub nutritional_info: NutritionalInfo,
    pub dietary_restrictions: Vec<DietaryRestriction>,
    pub prep_time: String,
    pub servings: u32,
    pub original_servings: u32,
    pub current_servings: u32,
    pub is_favorite: bool,
    /// Ingredient lines as parsed, before any scaling
    pub original_ingredients: Vec<String>,
    /// Nutrition as parsed, before any scaling
    pub original_nutritional_info: NutritionalInfo,
}

impl Meal {
    /// Create a meal at baseline servings with a freshly minted id.
    /// An empty name falls back to `DEFAULT_MEAL_NAME`.
    pub fn new(
        name: String,
        ingredients: Vec<String>,
        instructions: String,
        nutritional_info: NutritionalInfo,
        request: &MealRequest,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            name,
            ingredients,
            instructions,
            nutritional_info,
            request,
        )
    }

    pub fn with_id(
        id: String,
        name: String,
        ingredients: Vec<String>,
        instructions: String,
        nutritional_info: NutritionalInfo,
        request: &MealRequest,
    ) -> Self {
        let name = if name.trim().is_empty() {
            DEFAULT_MEAL_NAME.to_string()
        } else {
            name
        };

        Self {
            id,
            name,
            original_ingredients: ingredients.clone(),
            ingredients,
            instructions,
            original_nutritional_info: nutritional_info.clone(),
            nutritional_info,
            dietary_restrictions: request.dietary_restrictions.iter().copied().collect(),
            prep_time: request.time_constraint.prep_time().to_string(),
            servings: DISPLAY_SERVINGS,
            original_servings: BASELINE_SERVINGS,
            current_servings: BASELINE_SERVINGS,
            is_favorite: false,
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Meal: {}", self.name)?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Prep time: {}", self.prep_time)?;
        writeln!(
            f,
            "Servings: {} (scaled for {})",
            self.servings, self.current_servings
        )?;

        if !self.dietary_restrictions.is_empty() {
            let tags = self
                .dietary_restrictions
                .iter()
                .map(DietaryRestriction::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "Diet: {}", tags)?;
        }

        writeln!(f, "\nIngredients:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "  - {}", ingredient)?;
        }

        if !self.instructions.is_empty() {
            writeln!(f, "\nInstructions:\n{}", self.instructions)?;
        }

        writeln!(f, "\nNutrition: {}", self.nutritional_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::TimeConstraint;

    fn vegan_request() -> MealRequest {
        MealRequest::new(TimeConstraint::ThirtyMinutes, [DietaryRestriction::Vegan])
    }

    #[test]
    fn test_new_meal_defaults() {
        let meal = Meal::new(
            "Lentil Soup".to_string(),
            vec!["1 cup lentils".to_string()],
            "Simmer.".to_string(),
            NutritionalInfo::default(),
            &vegan_request(),
        );

        assert!(!meal.id.is_empty());
        assert_eq!(meal.servings, 2);
        assert_eq!(meal.original_servings, 4);
        assert_eq!(meal.current_servings, 4);
        assert!(!meal.is_favorite);
        assert_eq!(meal.prep_time, "30 minutes");
        assert_eq!(meal.dietary_restrictions, vec![DietaryRestriction::Vegan]);
        assert_eq!(meal.original_ingredients, meal.ingredients);
    }

    #[test]
    fn test_blank_name_falls_back() {
        let meal = Meal::new(
            "   ".to_string(),
            Vec::new(),
            String::new(),
            NutritionalInfo::default(),
            &MealRequest::default(),
        );

        assert_eq!(meal.name, DEFAULT_MEAL_NAME);
    }

    #[test]
    fn test_ids_are_unique() {
        let request = MealRequest::default();
        let a = Meal::new(String::new(), vec![], String::new(), NutritionalInfo::default(), &request);
        let b = Meal::new(String::new(), vec![], String::new(), NutritionalInfo::default(), &request);

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_display_lists_ingredients_and_instructions() {
        let meal = Meal::new(
            "Lentil Soup".to_string(),
            vec!["1 cup lentils".to_string(), "2 carrots".to_string()],
            "Simmer for 20 minutes.".to_string(),
            NutritionalInfo::default(),
            &vegan_request(),
        );

        let output = meal.to_string();

        assert!(output.contains("Meal: Lentil Soup"));
        assert!(output.contains("  - 1 cup lentils"));
        assert!(output.contains("  - 2 carrots"));
        assert!(output.contains("Diet: vegan"));
        assert!(output.contains("Simmer for 20 minutes."));
    }

    #[test]
    fn test_serializes_camel_case() {
        let meal = Meal::with_id(
            "abc".to_string(),
            "Toast".to_string(),
            vec![],
            String::new(),
            NutritionalInfo::default(),
            &MealRequest::new(TimeConstraint::FifteenMinutes, [DietaryRestriction::GlutenFree]),
        );

        let json = serde_json::to_value(&meal).expect("Failed to serialize meal");

        assert_eq!(json["currentServings"], 4);
        assert_eq!(json["nutritionalInfo"]["calories"], "0");
        assert_eq!(json["dietaryRestrictions"][0], "gluten-free");
        assert_eq!(json["isFavorite"], false);
    }
}
