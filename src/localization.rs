//! # Localization Module
//!
//! User-facing labels of the scaler ("Scaled to 200%", "8 servings", prompts),
//! backed by Fluent bundles. Resources are embedded at compile time from
//! `locales/<lang>/main.ftl`.

use anyhow::{anyhow, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use log::warn;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

use crate::scale_errors::ScaleError;
use crate::scaler_config::DEFAULT_LOCALE;

/// Languages with a bundled resource
const RESOURCES: [(&str, &str); 2] = [
    ("en", include_str!("../locales/en/main.ftl")),
    ("fr", include_str!("../locales/fr/main.ftl")),
];

/// Localization manager for the scaler labels
pub struct LocalizationManager {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
}

impl LocalizationManager {
    /// Create a localization manager with every bundled language loaded
    pub fn new() -> Result<Self> {
        let mut bundles = HashMap::new();

        for (language, source) in RESOURCES {
            let locale: LanguageIdentifier = language.parse()?;
            let bundle = Self::create_bundle(&locale, source)?;
            bundles.insert(language.to_string(), bundle);
        }

        Ok(Self { bundles })
    }

    /// Create a fluent bundle for a specific locale
    fn create_bundle(locale: &LanguageIdentifier, source: &str) -> Result<FluentBundle<FluentResource>> {
        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        // Labels go straight to a terminal, no bidi isolation marks
        bundle.set_use_isolating(false);

        let resource = FluentResource::try_new(source.to_string())
            .map_err(|(_, errors)| anyhow!("Invalid resource for {}: {:?}", locale, errors))?;
        bundle
            .add_resource(resource)
            .map_err(|errors| anyhow!("Conflicting messages for {}: {:?}", locale, errors))?;

        Ok(bundle)
    }

    /// Whether a language (or its primary subtag, "fr" for "fr-CA") has a bundle
    pub fn supports(&self, language: &str) -> bool {
        self.bundles.contains_key(&primary_subtag(language))
    }

    /// Get a localized message, falling back to English for unsupported languages
    pub fn get_message_in_language(
        &self,
        key: &str,
        language: &str,
        args: Option<&FluentArgs<'_>>,
    ) -> String {
        let bundle = match self
            .bundles
            .get(&primary_subtag(language))
            .or_else(|| self.bundles.get(DEFAULT_LOCALE))
        {
            Some(bundle) => bundle,
            None => return format!("Missing translation: {}", key),
        };

        let msg = match bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {}", key),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {}", key),
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            warn!("Errors formatting message {}: {:?}", key, errors);
        }
        value.into_owned()
    }

    /// Get a localized message with simple string arguments
    pub fn get_message_with_args(&self, key: &str, language: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.get_message_in_language(key, language, Some(&fluent_args))
    }

    /// "Scaled to 200%"
    pub fn percent_label(&self, language: &str, percent_label: &str) -> String {
        self.get_message_with_args("scale-percent", language, &[("percent", percent_label)])
    }

    /// "8 servings", with plural rules of the language
    pub fn servings_label(&self, language: &str, servings: u32) -> String {
        let mut args = FluentArgs::new();
        args.set("count", FluentValue::from(servings));
        self.get_message_in_language("scale-servings", language, Some(&args))
    }

    /// User-facing explanation of why a constraint does not scale
    pub fn scale_error_message(&self, language: &str, error: &ScaleError) -> String {
        match error {
            ScaleError::UnknownIngredient(id) => {
                self.get_message_with_args(error.message_key(), language, &[("id", id.as_str())])
            }
            _ => self.get_message_in_language(error.message_key(), language, None),
        }
    }
}

fn primary_subtag(language: &str) -> String {
    language
        .split(|c: char| c == '-' || c == '_')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}
