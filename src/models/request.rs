use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// How long the suggested meal may take to prepare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeConstraint {
    #[default]
    #[serde(rename = "15min")]
    FifteenMinutes,
    #[serde(rename = "30min")]
    ThirtyMinutes,
}

impl TimeConstraint {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeConstraint::FifteenMinutes => "15min",
            TimeConstraint::ThirtyMinutes => "30min",
        }
    }

    /// Prep time shown on the meal card
    pub fn prep_time(&self) -> &'static str {
        match self {
            TimeConstraint::FifteenMinutes => "15 minutes",
            TimeConstraint::ThirtyMinutes => "30 minutes",
        }
    }
}

impl fmt::Display for TimeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeConstraint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "15min" => Ok(TimeConstraint::FifteenMinutes),
            "30min" => Ok(TimeConstraint::ThirtyMinutes),
            other => Err(format!(
                "unknown time constraint '{}' (expected 15min or 30min)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    NutFree,
}

impl DietaryRestriction {
    pub const ALL: [DietaryRestriction; 5] = [
        DietaryRestriction::Vegetarian,
        DietaryRestriction::Vegan,
        DietaryRestriction::GlutenFree,
        DietaryRestriction::DairyFree,
        DietaryRestriction::NutFree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryRestriction::Vegetarian => "vegetarian",
            DietaryRestriction::Vegan => "vegan",
            DietaryRestriction::GlutenFree => "gluten-free",
            DietaryRestriction::DairyFree => "dairy-free",
            DietaryRestriction::NutFree => "nut-free",
        }
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryRestriction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|restriction| restriction.as_str() == wanted)
            .ok_or_else(|| format!("unknown dietary restriction '{}'", s))
    }
}

/// The caller-side selections that accompany a suggestion request.
///
/// Restrictions keep the order in which they were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealRequest {
    pub time_constraint: TimeConstraint,
    pub dietary_restrictions: IndexSet<DietaryRestriction>,
}

impl MealRequest {
    pub fn new<I>(time_constraint: TimeConstraint, restrictions: I) -> Self
    where
        I: IntoIterator<Item = DietaryRestriction>,
    {
        Self {
            time_constraint,
            dietary_restrictions: restrictions.into_iter().collect(),
        }
    }

    /// Select the restriction if it is not selected yet, otherwise deselect it
    pub fn toggle_restriction(&mut self, restriction: DietaryRestriction) {
        if !self.dietary_restrictions.shift_remove(&restriction) {
            self.dietary_restrictions.insert(restriction);
        }
    }

    /// Text sent to the generative model for a meal suggestion
    pub fn prompt(&self) -> String {
        let diet = if self.dietary_restrictions.is_empty() {
            String::new()
        } else {
            let joined = self
                .dietary_restrictions
                .iter()
                .map(DietaryRestriction::as_str)
                .collect::<Vec<_>>()
                .join(" and ");
            format!(" and is {}", joined)
        };

        format!(
            "Suggest a healthy meal that takes {} to prepare{}. Include name, ingredients, instructions, and nutritional information.",
            self.time_constraint, diet
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("vegetarian", DietaryRestriction::Vegetarian)]
    #[case("gluten-free", DietaryRestriction::GlutenFree)]
    #[case("Dairy-Free", DietaryRestriction::DairyFree)]
    #[case(" nut-free ", DietaryRestriction::NutFree)]
    fn test_parse_dietary_restriction(#[case] input: &str, #[case] expected: DietaryRestriction) {
        assert_eq!(input.parse::<DietaryRestriction>(), Ok(expected));
    }

    #[test]
    fn test_parse_unknown_restriction_fails() {
        assert!("paleo".parse::<DietaryRestriction>().is_err());
    }

    #[test]
    fn test_time_constraint_prep_time() {
        assert_eq!(TimeConstraint::FifteenMinutes.prep_time(), "15 minutes");
        assert_eq!(
            "30min".parse::<TimeConstraint>().map(|t| t.prep_time()),
            Ok("30 minutes")
        );
    }

    #[test]
    fn test_prompt_without_restrictions() {
        let request = MealRequest::default();

        assert_eq!(
            request.prompt(),
            "Suggest a healthy meal that takes 15min to prepare. Include name, ingredients, instructions, and nutritional information."
        );
    }

    #[test]
    fn test_prompt_joins_restrictions_in_selection_order() {
        let request = MealRequest::new(
            TimeConstraint::ThirtyMinutes,
            [DietaryRestriction::NutFree, DietaryRestriction::Vegan],
        );

        assert_eq!(
            request.prompt(),
            "Suggest a healthy meal that takes 30min to prepare and is nut-free and vegan. Include name, ingredients, instructions, and nutritional information."
        );
    }

    #[test]
    fn test_toggle_restriction() {
        let mut request = MealRequest::new(
            TimeConstraint::FifteenMinutes,
            [DietaryRestriction::Vegan, DietaryRestriction::GlutenFree],
        );

        request.toggle_restriction(DietaryRestriction::Vegan);
        assert_eq!(
            request.dietary_restrictions.iter().copied().collect::<Vec<_>>(),
            vec![DietaryRestriction::GlutenFree]
        );

        request.toggle_restriction(DietaryRestriction::Vegan);
        assert_eq!(
            request.dietary_restrictions.iter().copied().collect::<Vec<_>>(),
            vec![DietaryRestriction::GlutenFree, DietaryRestriction::Vegan]
        );
    }
}
