//! # Recipe Scaler
//!
//! Derives a scale factor from "I only have X of ingredient Y" and applies it
//! to every ingredient of a recipe, producing display text, delta badges and a
//! scaled serving count.
//!
//! The scaler is stateless: the selected ingredient and the typed amount belong
//! to whoever drives it, and every call recomputes from its inputs. An
//! ingredient whose amount is not a number ("to taste") is shown unscaled while
//! the rest of the recipe scales normally.
//!
//! ## Usage
//!
//! ```rust
//! use dizzydish::recipe_model::Ingredient;
//! use dizzydish::scaler::{resolve_scale_factor, scaled_display_text};
//!
//! let ingredients = vec![
//!     Ingredient::new("1a", "chicken breast", "1.5", "lbs"),
//!     Ingredient::new("1j", "sour cream", "1/2", "cup"),
//! ];
//!
//! let factor = resolve_scale_factor(&ingredients, "1a", "3").unwrap();
//! assert_eq!(factor, 2.0);
//! assert_eq!(scaled_display_text(&ingredients[1], factor), "1 cup sour cream");
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::quantity::{format_amount, format_percent, parse_decimal, parse_quantity};
use crate::recipe_model::{compose_display, Ingredient, Recipe};
use crate::scale_errors::ScaleError;
use crate::scaler_config::{DELTA_THRESHOLD, MIN_SERVINGS};

/// "I only have `desired_amount` of ingredient `ingredient_id`"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleConstraint {
    /// Id of the limiting ingredient
    pub ingredient_id: String,
    /// Amount on hand, as typed; decimal entry only
    pub desired_amount: String,
}

/// One ingredient line after scaling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledIngredient {
    pub id: String,
    /// Display text, scaled when the amount is numeric, otherwise the original text
    pub text: String,
    /// Signed change from the original amount ("+1", "-½"), if noticeable
    pub delta: Option<String>,
    /// Whether this is the limiting ingredient
    pub is_constraint: bool,
    /// Whether the amount was numeric and got scaled
    pub scaled: bool,
}

/// A whole recipe scaled by one factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledRecipe {
    pub factor: f64,
    /// Factor as a percentage ("200%")
    pub percent_label: String,
    pub servings: u32,
    pub ingredients: Vec<ScaledIngredient>,
}

impl ScaleConstraint {
    pub fn new(ingredient_id: &str, desired_amount: &str) -> Self {
        Self {
            ingredient_id: ingredient_id.to_string(),
            desired_amount: desired_amount.to_string(),
        }
    }
}

/// The ingredient's amount, if it is a positive number
fn positive_amount(ingredient: &Ingredient) -> Option<f64> {
    parse_quantity(&ingredient.amount).filter(|amount| *amount > 0.0)
}

/// Display text of an ingredient scaled by `factor`
///
/// Amounts that do not parse, or are not positive, are echoed back unscaled.
/// Parsed amounts are re-rendered through [`format_amount`], so "1/2" at factor
/// 1.0 comes back as "½".
pub fn scaled_display_text(ingredient: &Ingredient, factor: f64) -> String {
    match positive_amount(ingredient) {
        Some(original) => compose_display(
            &format_amount(original * factor),
            &ingredient.unit,
            &ingredient.name,
        ),
        None => ingredient.display_text(),
    }
}

/// Derive a scale factor from a constraint, explaining failures
///
/// The desired amount is read as a plain decimal; fraction syntax is not
/// accepted for it.
pub fn try_resolve_scale_factor(
    ingredients: &[Ingredient],
    ingredient_id: &str,
    desired_amount: &str,
) -> Result<f64, ScaleError> {
    let ingredient = ingredients
        .iter()
        .find(|ingredient| ingredient.id == ingredient_id)
        .ok_or_else(|| ScaleError::UnknownIngredient(ingredient_id.to_string()))?;

    let original = parse_quantity(&ingredient.amount)
        .ok_or_else(|| ScaleError::UnscalableAmount(ingredient.amount.clone()))?;
    if original <= 0.0 {
        return Err(ScaleError::NonPositiveAmount(ingredient.amount.clone()));
    }

    let desired = parse_decimal(desired_amount.trim())
        .filter(|desired| *desired > 0.0)
        .ok_or_else(|| ScaleError::InvalidDesiredAmount(desired_amount.to_string()))?;

    Ok(desired / original)
}

/// Derive a scale factor from a constraint
///
/// Returns `None` when the ingredient is missing, its amount is not a positive
/// number, or the desired amount is not a positive decimal.
pub fn resolve_scale_factor(
    ingredients: &[Ingredient],
    ingredient_id: &str,
    desired_amount: &str,
) -> Option<f64> {
    match try_resolve_scale_factor(ingredients, ingredient_id, desired_amount) {
        Ok(factor) => {
            debug!("Resolved scale factor {} from ingredient {}", factor, ingredient_id);
            Some(factor)
        }
        Err(err) => {
            debug!("No scale factor for ingredient {}: {}", ingredient_id, err);
            None
        }
    }
}

/// Scaled serving count, never below one
pub fn scaled_servings(original_servings: u32, factor: f64) -> u32 {
    (original_servings as f64 * factor)
        .round()
        .max(MIN_SERVINGS as f64) as u32
}

/// Signed change of an ingredient's amount under `factor`
///
/// `None` for unscalable amounts and for changes of 0.01 or less.
pub fn delta_annotation(ingredient: &Ingredient, factor: f64) -> Option<String> {
    let original = positive_amount(ingredient)?;
    let diff = original * factor - original;
    if diff.abs() <= DELTA_THRESHOLD {
        return None;
    }

    Some(if diff < 0.0 {
        format_amount(diff)
    } else {
        format!("+{}", format_amount(diff))
    })
}

/// Ingredients that can act as a constraint, i.e. whose amount is numeric
pub fn scalable_ingredients(recipe: &Recipe) -> Vec<&Ingredient> {
    recipe
        .ingredients
        .iter()
        .filter(|ingredient| parse_quantity(&ingredient.amount).is_some())
        .collect()
}

/// Apply a known factor to every ingredient of a recipe
pub fn scale_with_factor(recipe: &Recipe, constraint_id: Option<&str>, factor: f64) -> ScaledRecipe {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| ScaledIngredient {
            id: ingredient.id.clone(),
            text: scaled_display_text(ingredient, factor),
            delta: delta_annotation(ingredient, factor),
            is_constraint: constraint_id == Some(ingredient.id.as_str()),
            scaled: positive_amount(ingredient).is_some(),
        })
        .collect();

    ScaledRecipe {
        factor,
        percent_label: format_percent(factor),
        servings: scaled_servings(recipe.servings, factor),
        ingredients,
    }
}

/// Resolve a constraint and scale the whole recipe by it
///
/// `None` when the constraint does not yield a factor.
pub fn scale_recipe(recipe: &Recipe, constraint: &ScaleConstraint) -> Option<ScaledRecipe> {
    let factor = resolve_scale_factor(
        &recipe.ingredients,
        &constraint.ingredient_id,
        &constraint.desired_amount,
    )?;
    Some(scale_with_factor(
        recipe,
        Some(constraint.ingredient_id.as_str()),
        factor,
    ))
}
