//! # Scale Error Types Module
//!
//! Reasons a scale factor cannot be derived from a constraint. None of these are
//! fatal: the factor is simply undefined and the caller keeps prompting for input.

/// Why a constraint does not yield a scale factor
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleError {
    /// No ingredient with this id in the recipe
    UnknownIngredient(String),
    /// The constraint ingredient's amount is not a number (e.g., "to taste")
    UnscalableAmount(String),
    /// The constraint ingredient's amount is zero or negative
    NonPositiveAmount(String),
    /// The amount the user has on hand is missing, not a decimal, or not positive
    InvalidDesiredAmount(String),
}

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::UnknownIngredient(id) => write!(f, "Unknown ingredient: {id}"),
            ScaleError::UnscalableAmount(amount) => {
                write!(f, "Ingredient amount is not a number: {amount}")
            }
            ScaleError::NonPositiveAmount(amount) => {
                write!(f, "Ingredient amount must be positive: {amount}")
            }
            ScaleError::InvalidDesiredAmount(amount) => {
                write!(f, "Available amount must be a positive number: {amount}")
            }
        }
    }
}

impl std::error::Error for ScaleError {}

impl ScaleError {
    /// Localization key of the message shown to the user for this error
    pub fn message_key(&self) -> &'static str {
        match self {
            ScaleError::UnknownIngredient(_) => "scale-unknown-ingredient",
            ScaleError::UnscalableAmount(_) | ScaleError::NonPositiveAmount(_) => {
                "scale-unscalable"
            }
            ScaleError::InvalidDesiredAmount(_) => "scale-prompt",
        }
    }
}
