//! # Localization Tests
//!
//! Message retrieval, plural-aware labels and language fallback.

use dizzydish::localization::LocalizationManager;

#[cfg(test)]
mod tests {
    use super::*;
    use dizzydish::scale_errors::ScaleError;

    fn setup_localization() -> LocalizationManager {
        LocalizationManager::new().expect("Failed to create localization manager")
    }

    #[test]
    fn test_get_message_existing_key() {
        let manager = setup_localization();
        assert_eq!(manager.get_message_in_language("scale-title", "en", None), "Scale Recipe");
        assert_eq!(
            manager.get_message_in_language("scale-title", "fr", None),
            "Adapter la recette"
        );
    }

    #[test]
    fn test_get_message_nonexistent_key() {
        let manager = setup_localization();
        let message = manager.get_message_in_language("nonexistent-key", "en", None);
        assert_eq!(message, "Missing translation: nonexistent-key");
    }

    #[test]
    fn test_unsupported_language_falls_back_to_english() {
        let manager = setup_localization();
        assert_eq!(manager.get_message_in_language("scale-title", "de", None), "Scale Recipe");
    }

    #[test]
    fn test_region_subtag_uses_language_bundle() {
        let manager = setup_localization();
        assert_eq!(
            manager.get_message_in_language("scale-title", "fr-CA", None),
            "Adapter la recette"
        );
    }

    #[test]
    fn test_percent_label() {
        let manager = setup_localization();
        assert_eq!(manager.percent_label("en", "200%"), "Scaled to 200%");
        assert_eq!(manager.percent_label("fr", "50%"), "Ajustée à 50%");
    }

    #[test]
    fn test_servings_label_plurals() {
        let manager = setup_localization();
        assert_eq!(manager.servings_label("en", 1), "1 serving");
        assert_eq!(manager.servings_label("en", 8), "8 servings");
        assert_eq!(manager.servings_label("fr", 1), "1 portion");
        assert_eq!(manager.servings_label("fr", 6), "6 portions");
    }

    #[test]
    fn test_get_message_with_args() {
        let manager = setup_localization();
        let message = manager.get_message_with_args(
            "recipe-summary",
            "en",
            &[("title", "Creamy Tomato Basil Soup"), ("time", "30 min")],
        );
        assert_eq!(message, "Creamy Tomato Basil Soup · 30 min");
    }

    #[test]
    fn test_scale_error_messages() {
        let manager = setup_localization();

        let unknown = ScaleError::UnknownIngredient("9z".to_string());
        assert_eq!(manager.scale_error_message("en", &unknown), "No ingredient with id 9z");

        let unscalable = ScaleError::UnscalableAmount("to taste".to_string());
        assert_eq!(
            manager.scale_error_message("en", &unscalable),
            "This ingredient has no amount to scale by"
        );

        let invalid = ScaleError::InvalidDesiredAmount("abc".to_string());
        assert_eq!(manager.scale_error_message("en", &invalid), "Enter how much you have");
    }
}
