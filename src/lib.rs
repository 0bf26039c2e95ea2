//! # DizzyDish
//!
//! Recipe scaling for the DizzyDish recipe picker: parse free-form ingredient
//! quantities, derive a scale factor from "I only have X of this", and render
//! every scaled amount back as friendly text (whole numbers, ¼ ⅓ ½ ⅔ ¾, or
//! short decimals).

pub mod localization;
pub mod quantity;
pub mod quantity_patterns;
pub mod recipe_model;
pub mod scale_errors;
pub mod scaler;
pub mod scaler_config;
