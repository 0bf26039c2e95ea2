//! # Recipe Data Model
//!
//! Plain records for recipes as they come out of the catalog: the recipe itself,
//! its ingredients and its preparation steps. Amounts are kept as the free-form
//! text the catalog supplies ("1.5", "1/2", "1 1/2", "to taste"); turning them
//! into numbers is the job of [`crate::quantity`].
//!
//! ## Usage
//!
//! ```rust
//! use dizzydish::recipe_model::Ingredient;
//!
//! let cream = Ingredient::new("1j", "sour cream", "1/2", "cup");
//! assert_eq!(cream.display_text(), "1/2 cup sour cream");
//!
//! let limes = Ingredient::new("1i", "lime", "1", "");
//! assert_eq!(limes.display_text(), "1 lime");
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// A single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    /// Identifier, unique among the ingredients of one recipe
    pub id: String,
    /// Ingredient name (e.g., "chicken breast")
    pub name: String,
    /// Free-form quantity text (e.g., "1.5", "1/2", "1 1/2", "to taste")
    pub amount: String,
    /// Free-form unit text; empty means no unit
    pub unit: String,
}

/// One preparation step
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeStep {
    pub id: u32,
    pub instruction: String,
    /// Duration in minutes, when the step is timed
    pub duration: Option<u32>,
}

/// A catalog recipe
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    /// Cooking time in minutes
    pub cook_time: u32,
    /// Preparation time in minutes
    pub prep_time: u32,
    pub servings: u32,
    pub difficulty: String,
    pub cuisine_type: String,
    pub vibes: Vec<String>,
    /// Short pitch explaining why this recipe was picked
    pub reason: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<RecipeStep>,
    pub dietary_tags: Vec<String>,
}

impl Ingredient {
    /// Create a new ingredient
    pub fn new(id: &str, name: &str, amount: &str, unit: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            amount: amount.to_string(),
            unit: unit.to_string(),
        }
    }

    /// Unscaled display text: amount, unit, name, with an empty unit left out
    pub fn display_text(&self) -> String {
        compose_display(&self.amount, &self.unit, &self.name)
    }
}

/// Join an amount, a unit and a name with single spaces, skipping empty parts
///
/// Shared by the unscaled display above and the scaled display in
/// [`crate::scaler`], so both render the same shape.
pub(crate) fn compose_display(amount: &str, unit: &str, name: &str) -> String {
    [amount, unit, name]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_text())
    }
}

impl Recipe {
    /// Parse a recipe from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse recipe JSON")
    }

    /// Load a recipe from a JSON file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe file {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid recipe file {}", path.display()))
    }

    /// Preparation plus cooking time, in minutes
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }

    /// Human-friendly total time: "25 min", "1h", "1h 15m"
    pub fn time_label(&self) -> String {
        let total = self.total_time();
        if total < 60 {
            return format!("{total} min");
        }
        let hours = total / 60;
        let mins = total % 60;
        if mins > 0 {
            format!("{hours}h {mins}m")
        } else {
            format!("{hours}h")
        }
    }

    /// Look up an ingredient by id
    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with_times(prep_time: u32, cook_time: u32) -> Recipe {
        Recipe {
            id: "1".to_string(),
            title: "Sheet Pan Chicken Fajitas".to_string(),
            image_url: String::new(),
            cook_time,
            prep_time,
            servings: 4,
            difficulty: "Easy".to_string(),
            cuisine_type: "Mexican".to_string(),
            vibes: vec!["Lazy".to_string()],
            reason: String::new(),
            ingredients: vec![Ingredient::new("1a", "chicken breast", "1.5", "lbs")],
            steps: vec![],
            dietary_tags: vec![],
        }
    }

    #[test]
    fn test_display_text_with_unit() {
        let ingredient = Ingredient::new("1a", "chicken breast", "1.5", "lbs");
        assert_eq!(ingredient.display_text(), "1.5 lbs chicken breast");
        assert_eq!(ingredient.to_string(), "1.5 lbs chicken breast");
    }

    #[test]
    fn test_display_text_without_unit() {
        let ingredient = Ingredient::new("1b", "bell peppers", "3", "");
        assert_eq!(ingredient.display_text(), "3 bell peppers");
    }

    #[test]
    fn test_display_text_without_amount() {
        let ingredient = Ingredient::new("x", "salt", "", "");
        assert_eq!(ingredient.display_text(), "salt");
    }

    #[test]
    fn test_time_label() {
        assert_eq!(recipe_with_times(10, 20).time_label(), "30 min");
        assert_eq!(recipe_with_times(15, 45).time_label(), "1h");
        assert_eq!(recipe_with_times(20, 55).time_label(), "1h 15m");
    }

    #[test]
    fn test_ingredient_lookup() {
        let recipe = recipe_with_times(10, 20);
        assert_eq!(recipe.ingredient("1a").map(|i| i.name.as_str()), Some("chicken breast"));
        assert!(recipe.ingredient("zz").is_none());
    }

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_value(recipe_with_times(10, 20)).unwrap();
        assert!(json.get("imageURL").is_some());
        assert!(json.get("cookTime").is_some());
        assert!(json.get("dietaryTags").is_some());
    }
}
