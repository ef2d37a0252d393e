//! Turns the free-text meal suggestion into a `Meal`.
//!
//! One forward pass over the lines, driven by a `Section` state. Every line is
//! first classified by `classify_line`, which fixes the detection priority:
//! a `name:` line wins over section headers, and headers win over content.
//! Missing or malformed fields fall back to defaults; parsing never fails.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::{Meal, MealRequest, NutritionalInfo};

static NAME_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)name:").expect("valid regex"));
static CALORIES_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)calories:").expect("valid regex"));
static PROTEIN_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)protein:").expect("valid regex"));
static CARBS_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)carbs:|carbohydrates:").expect("valid regex"));

const BULLETS: [char; 3] = ['•', '-', '*'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    None,
    Ingredients,
    Instructions,
    Nutrition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Name,
    Header(Section),
    Content,
    Blank,
}

/// Classify a cleaned line. Checked in order: name, ingredients header,
/// instructions header, nutrition header, then content.
pub fn classify_line(line: &str) -> LineKind {
    let lower = line.to_lowercase();

    if lower.contains("name:") {
        LineKind::Name
    } else if lower.contains("ingredients:") {
        LineKind::Header(Section::Ingredients)
    } else if lower.contains("instructions:") {
        LineKind::Header(Section::Instructions)
    } else if lower.contains("nutritional information") {
        LineKind::Header(Section::Nutrition)
    } else if line.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Content
    }
}

/// Trim and drop markdown emphasis
pub fn clean_line(line: &str) -> String {
    line.replace('*', "").trim().to_string()
}

#[derive(Debug, Default)]
struct ParsedFields {
    name: String,
    ingredients: Vec<String>,
    instructions: String,
    nutrition: NutritionalInfo,
}

/// Parse a raw model response into a meal for the given request
pub fn parse_meal_response(raw: &str, request: &MealRequest) -> Meal {
    let mut section = Section::None;
    let mut fields = ParsedFields::default();

    for raw_line in raw.lines() {
        let line = clean_line(raw_line);

        match classify_line(&line) {
            LineKind::Name => {
                fields.name = extract_name(&line);
                debug!(name = %fields.name, "found meal name");
            }
            LineKind::Header(next) => {
                debug!(?next, "switching section");
                section = next;
            }
            LineKind::Blank => {}
            LineKind::Content => match section {
                Section::Ingredients => {
                    if let Some(ingredient) = clean_ingredient(&line) {
                        debug!(%ingredient, "added ingredient");
                        fields.ingredients.push(ingredient);
                    }
                }
                Section::Instructions => {
                    debug!(instruction = %line, "added instruction");
                    fields.instructions.push_str(&line);
                    fields.instructions.push('\n');
                }
                Section::Nutrition => apply_nutrition_line(&line, &mut fields.nutrition),
                Section::None => {}
            },
        }
    }

    debug!(
        name = %fields.name,
        ingredients = fields.ingredients.len(),
        "parsed meal response"
    );

    Meal::new(
        fields.name,
        fields.ingredients,
        fields.instructions.trim().to_string(),
        fields.nutrition,
        request,
    )
}

/// Text between the first `Name:` marker and the next one, if any. A marker
/// with other casing is accepted when the literal one is absent.
fn extract_name(line: &str) -> String {
    let name = match line.find("Name:") {
        Some(pos) => {
            let after = &line[pos + "Name:".len()..];
            after.find("Name:").map_or(after, |end| &after[..end])
        }
        None => match NAME_MARKER.find(line) {
            Some(m) => {
                let after = &line[m.end()..];
                NAME_MARKER.find(after).map_or(after, |next| &after[..next.start()])
            }
            None => "",
        },
    };
    name.trim().to_string()
}

/// Strip one leading bullet and any emphasis. `None` when nothing is left.
fn clean_ingredient(line: &str) -> Option<String> {
    let without_bullet = match line.chars().next() {
        Some(c) if BULLETS.contains(&c) => &line[c.len_utf8()..],
        _ => line,
    };

    let ingredient = clean_line(without_bullet);
    (!ingredient.is_empty()).then_some(ingredient)
}

/// The text between `marker` and the next hyphen, trimmed
fn extract_value(line: &str, marker: &Regex) -> Option<String> {
    let m = marker.find(line)?;
    let rest = &line[m.end()..];
    let value = rest.split('-').next().unwrap_or_default().trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Fat and fiber have no extraction rule and keep their defaults.
fn apply_nutrition_line(line: &str, nutrition: &mut NutritionalInfo) {
    let lower = line.to_lowercase();

    if lower.contains("calories:") {
        if let Some(value) = extract_value(line, &CALORIES_MARKER) {
            debug!(calories = %value, "set calories");
            nutrition.calories = value;
        }
    } else if lower.contains("protein:") {
        if let Some(value) = extract_value(line, &PROTEIN_MARKER) {
            debug!(protein = %value, "set protein");
            nutrition.protein = format!("{}g", value);
        }
    } else if lower.contains("carbs:") || lower.contains("carbohydrates:") {
        if let Some(value) = extract_value(line, &CARBS_MARKER) {
            debug!(carbs = %value, "set carbs");
            nutrition.carbs = format!("{}g", value);
        }
    }
}
