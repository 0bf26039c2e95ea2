use anyhow::{bail, Result};
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dizzydish::localization::LocalizationManager;
use dizzydish::quantity::parse_quantity;
use dizzydish::recipe_model::Recipe;
use dizzydish::scaler::{scale_with_factor, try_resolve_scale_factor};
use dizzydish::scaler_config::{AppConfig, LogFormat};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env().with_locale(cli.locale.as_deref());

    init_tracing(config.log_format);
    info!(locale = %config.locale, "Starting dizzydish");

    let localization = LocalizationManager::new()?;
    if !localization.supports(&config.locale) {
        warn!(locale = %config.locale, "Unsupported locale, falling back to English");
    }

    match cli.command {
        Commands::Ingredients { recipe } => list_ingredients(&recipe, &config, &localization),
        Commands::Scale {
            recipe,
            ingredient,
            have,
        } => scale(&recipe, &ingredient, &have, &config, &localization),
    }
}

/// Install the tracing subscriber; `log` records from the library are bridged into it
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Plain => builder.init(),
    }
}

fn list_ingredients(path: &Path, config: &AppConfig, localization: &LocalizationManager) -> Result<()> {
    let recipe = Recipe::load(path)?;
    info!(recipe = %recipe.id, count = recipe.ingredients.len(), "Listing ingredients");
    let lang = config.locale.as_str();
    let time = recipe.time_label();

    println!(
        "{}",
        localization.get_message_with_args(
            "recipe-summary",
            lang,
            &[("title", recipe.title.as_str()), ("time", time.as_str())],
        )
    );
    println!("{}", localization.servings_label(lang, recipe.servings));
    println!(
        "{} {}",
        localization.get_message_in_language("scale-limit-question", lang, None),
        localization.get_message_in_language("scale-limit-hint", lang, None)
    );

    for ingredient in &recipe.ingredients {
        let marker = if parse_quantity(&ingredient.amount).is_some() { '*' } else { ' ' };
        println!("{} {:<6} {}", marker, ingredient.id, ingredient.display_text());
    }

    Ok(())
}

fn scale(
    path: &Path,
    ingredient_id: &str,
    have: &str,
    config: &AppConfig,
    localization: &LocalizationManager,
) -> Result<()> {
    let recipe = Recipe::load(path)?;
    let lang = config.locale.as_str();

    let factor = match try_resolve_scale_factor(&recipe.ingredients, ingredient_id, have) {
        Ok(factor) => factor,
        Err(err) => {
            warn!(recipe = %recipe.id, ingredient = ingredient_id, error = %err, "Cannot scale recipe");
            bail!("{}", localization.scale_error_message(lang, &err));
        }
    };

    let scaled = scale_with_factor(&recipe, Some(ingredient_id), factor);
    info!(recipe = %recipe.id, factor, servings = scaled.servings, "Scaled recipe");

    println!(
        "{}: {}",
        localization.get_message_in_language("scale-title", lang, None),
        recipe.title
    );
    println!("{}", localization.percent_label(lang, &scaled.percent_label));
    println!("{}", localization.servings_label(lang, scaled.servings));

    for line in &scaled.ingredients {
        let marker = if line.is_constraint { '>' } else { '-' };
        match &line.delta {
            Some(delta) => println!("{} {} ({})", marker, line.text, delta),
            None => println!("{} {}", marker, line.text),
        }
    }

    Ok(())
}
