//! # Recipe Scaling Example
//!
//! Walks through the scaler: reading quantities, deriving a factor from the one
//! ingredient you are short on, and printing the scaled recipe with its delta
//! badges.

use dizzydish::quantity::{format_amount, parse_quantity};
use dizzydish::recipe_model::Recipe;
use dizzydish::scaler::{scalable_ingredients, scale_recipe, ScaleConstraint};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🍳 Recipe Scaling Example");
    println!("=========================\n");

    println!("📖 Example 1: Reading and rendering quantities");
    println!("----------------------------------------------");
    for text in ["1/2", "1 1/2", "2.26", "0.083", "to taste"] {
        match parse_quantity(text) {
            Some(value) => println!("  {:>8} → {} → \"{}\"", text, value, format_amount(value)),
            None => println!("  {:>8} → not a number, shown as-is", text),
        }
    }

    println!("\n📖 Example 2: Scaling to what you have");
    println!("--------------------------------------");
    let recipe = Recipe::from_json_str(include_str!("../data/sheet_pan_fajitas.json"))?;
    println!("{} ({}, {} servings)", recipe.title, recipe.time_label(), recipe.servings);

    let choices: Vec<&str> = scalable_ingredients(&recipe)
        .iter()
        .map(|ingredient| ingredient.id.as_str())
        .collect();
    println!("Ingredients you can scale by: {}", choices.join(", "));

    // 3 lbs of chicken on hand doubles the recipe
    let constraint = ScaleConstraint::new("1a", "3");
    match scale_recipe(&recipe, &constraint) {
        Some(scaled) => {
            println!("Scaled to {} → {} servings", scaled.percent_label, scaled.servings);
            for line in &scaled.ingredients {
                let marker = if line.is_constraint { "◎" } else { "•" };
                match &line.delta {
                    Some(delta) => println!("  {} {}  [{}]", marker, line.text, delta),
                    None => println!("  {} {}", marker, line.text),
                }
            }
        }
        None => println!("Enter how much you have"),
    }

    println!("\n📖 Example 3: A constraint that cannot scale");
    println!("--------------------------------------------");
    let constraint = ScaleConstraint::new("1k", "2");
    println!(
        "  {} by '{}': {}",
        constraint.ingredient_id,
        constraint.desired_amount,
        if scale_recipe(&recipe, &constraint).is_some() { "scaled" } else { "no factor" }
    );

    Ok(())
}
