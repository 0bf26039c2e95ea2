//! CLI definitions for the `dizzydish` binary

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dizzydish")]
#[command(version)]
#[command(about = "Scale a recipe to the ingredients you actually have", long_about = None)]
pub struct Cli {
    /// Language of the labels (overrides DIZZYDISH_LOCALE)
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the ingredients of a recipe; scalable ones are marked with '*'
    Ingredients {
        /// Path to the recipe JSON file
        recipe: PathBuf,
    },

    /// Scale a recipe to the amount you have of one ingredient
    Scale {
        /// Path to the recipe JSON file
        recipe: PathBuf,

        /// Id of the limiting ingredient
        #[arg(short, long)]
        ingredient: String,

        /// Amount of that ingredient you have, in its own unit (decimal)
        #[arg(long)]
        have: String,
    },
}
