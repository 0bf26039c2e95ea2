//! # Scaler Tests
//!
//! Scale factor resolution, scaled display text, delta badges and servings.

use dizzydish::recipe_model::{Ingredient, Recipe};

fn fajitas() -> Recipe {
    Recipe {
        id: "1".to_string(),
        title: "Sheet Pan Chicken Fajitas".to_string(),
        image_url: String::new(),
        cook_time: 20,
        prep_time: 10,
        servings: 4,
        difficulty: "Easy".to_string(),
        cuisine_type: "Mexican".to_string(),
        vibes: vec!["Lazy".to_string(), "Comfort".to_string()],
        reason: String::new(),
        ingredients: vec![
            Ingredient::new("1a", "chicken breast", "1.5", "lbs"),
            Ingredient::new("1b", "bell peppers", "3", ""),
            Ingredient::new("1h", "flour tortillas", "8", ""),
            Ingredient::new("1j", "sour cream", "1/2", "cup"),
            Ingredient::new("1k", "salt and pepper", "to taste", ""),
        ],
        steps: vec![],
        dietary_tags: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dizzydish::scaler::{
        delta_annotation, resolve_scale_factor, scalable_ingredients, scale_recipe,
        scaled_display_text, scaled_servings, ScaleConstraint,
    };

    #[test]
    fn test_resolve_factor_doubling() {
        let recipe = fajitas();
        assert_eq!(resolve_scale_factor(&recipe.ingredients, "1a", "3"), Some(2.0));
        assert_eq!(resolve_scale_factor(&recipe.ingredients, "1j", "1"), Some(2.0));
    }

    #[test]
    fn test_resolve_factor_trims_typed_amount() {
        let recipe = fajitas();
        assert_eq!(resolve_scale_factor(&recipe.ingredients, "1a", " 3 "), Some(2.0));
    }

    #[test]
    fn test_resolve_factor_undefined_cases() {
        let recipe = fajitas();
        // Unparseable constraint ingredient, whatever the desired amount
        assert_eq!(resolve_scale_factor(&recipe.ingredients, "1k", "2"), None);
        assert_eq!(resolve_scale_factor(&recipe.ingredients, "1k", "100"), None);
        // Unknown ingredient
        assert_eq!(resolve_scale_factor(&recipe.ingredients, "nope", "2"), None);
        // Desired amount must be a positive decimal
        assert_eq!(resolve_scale_factor(&recipe.ingredients, "1a", ""), None);
        assert_eq!(resolve_scale_factor(&recipe.ingredients, "1a", "0"), None);
        assert_eq!(resolve_scale_factor(&recipe.ingredients, "1a", "-1"), None);
        assert_eq!(resolve_scale_factor(&recipe.ingredients, "1a", "abc"), None);
        assert_eq!(resolve_scale_factor(&recipe.ingredients, "1a", "1/2"), None);
    }

    #[test]
    fn test_scaled_display_text_end_to_end() {
        let recipe = fajitas();
        let factor = resolve_scale_factor(&recipe.ingredients, "1a", "3").unwrap();
        let sour_cream = recipe.ingredient("1j").unwrap();
        assert_eq!(scaled_display_text(sour_cream, factor), "1 cup sour cream");
    }

    #[test]
    fn test_scaled_display_text_canonicalizes_at_unit_factor() {
        let sour_cream = Ingredient::new("1j", "sour cream", "1/2", "cup");
        assert_eq!(scaled_display_text(&sour_cream, 1.0), "½ cup sour cream");
        let chicken = Ingredient::new("1a", "chicken breast", "1.5", "lbs");
        assert_eq!(scaled_display_text(&chicken, 1.0), "1 ½ lbs chicken breast");
    }

    #[test]
    fn test_scaled_display_text_omits_empty_unit() {
        let peppers = Ingredient::new("1b", "bell peppers", "3", "");
        assert_eq!(scaled_display_text(&peppers, 2.0), "6 bell peppers");
    }

    #[test]
    fn test_scaled_display_text_echoes_unparseable_amount() {
        let seasoning = Ingredient::new("1k", "salt and pepper", "to taste", "");
        assert_eq!(scaled_display_text(&seasoning, 2.0), "to taste salt and pepper");
    }

    #[test]
    fn test_scaled_servings_clamp() {
        assert_eq!(scaled_servings(4, 0.1), 1);
        assert_eq!(scaled_servings(4, 2.0), 8);
        assert_eq!(scaled_servings(4, 0.5), 2);
        assert_eq!(scaled_servings(4, 1.0 / 3.0), 1);
    }

    #[test]
    fn test_delta_annotation_signs() {
        let chicken = Ingredient::new("1a", "chicken breast", "1.5", "lbs");
        assert_eq!(delta_annotation(&chicken, 2.0), Some("+1 ½".to_string()));
        assert_eq!(delta_annotation(&chicken, 0.5), Some("-¾".to_string()));

        let tortillas = Ingredient::new("1h", "flour tortillas", "8", "");
        assert_eq!(delta_annotation(&tortillas, 2.0), Some("+8".to_string()));
    }

    #[test]
    fn test_delta_annotation_suppressed() {
        let lime = Ingredient::new("1i", "lime", "1", "");
        assert_eq!(delta_annotation(&lime, 1.0), None);
        assert_eq!(delta_annotation(&lime, 1.005), None);

        let seasoning = Ingredient::new("1k", "salt and pepper", "to taste", "");
        assert_eq!(delta_annotation(&seasoning, 2.0), None);
    }

    #[test]
    fn test_scalable_ingredients() {
        let recipe = fajitas();
        let ids: Vec<&str> = scalable_ingredients(&recipe)
            .iter()
            .map(|ingredient| ingredient.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1a", "1b", "1h", "1j"]);
    }

    #[test]
    fn test_scale_recipe_pipeline() {
        let recipe = fajitas();
        let scaled = scale_recipe(&recipe, &ScaleConstraint::new("1a", "3")).unwrap();

        assert_eq!(scaled.factor, 2.0);
        assert_eq!(scaled.percent_label, "200%");
        assert_eq!(scaled.servings, 8);
        assert_eq!(scaled.ingredients.len(), recipe.ingredients.len());

        let chicken = &scaled.ingredients[0];
        assert!(chicken.is_constraint);
        assert!(chicken.scaled);
        assert_eq!(chicken.text, "3 lbs chicken breast");
        assert_eq!(chicken.delta.as_deref(), Some("+1 ½"));

        let sour_cream = &scaled.ingredients[3];
        assert!(!sour_cream.is_constraint);
        assert_eq!(sour_cream.text, "1 cup sour cream");
        assert_eq!(sour_cream.delta.as_deref(), Some("+½"));

        // Unscalable lines pass through untouched while the rest scales
        let seasoning = &scaled.ingredients[4];
        assert!(!seasoning.scaled);
        assert_eq!(seasoning.text, "to taste salt and pepper");
        assert_eq!(seasoning.delta, None);
    }

    #[test]
    fn test_scale_recipe_down() {
        let recipe = fajitas();
        let scaled = scale_recipe(&recipe, &ScaleConstraint::new("1b", "1")).unwrap();

        assert_eq!(scaled.percent_label, "33%");
        assert_eq!(scaled.servings, 1);
        assert_eq!(scaled.ingredients[0].text, "½ lbs chicken breast");
        assert_eq!(scaled.ingredients[2].text, "2 ⅔ flour tortillas");
        assert_eq!(scaled.ingredients[2].delta.as_deref(), Some("-5 ⅓"));
    }

    #[test]
    fn test_scale_recipe_without_valid_constraint() {
        let recipe = fajitas();
        assert!(scale_recipe(&recipe, &ScaleConstraint::new("1k", "2")).is_none());
        assert!(scale_recipe(&recipe, &ScaleConstraint::new("1a", "")).is_none());
    }
}
