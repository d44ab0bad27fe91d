use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "meal-planner",
    version,
    about = "Builds a weekly meal plan and its shopping list",
    long_about = None
)]
pub struct Cli {
    /// JSON file with the user's targets and plan options
    pub request: PathBuf,

    /// Overrides CATALOG_PATH
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
