use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;

mod cli {
    pub mod args;
    pub mod dto;
    pub mod error;
    pub mod error_mapper;
    pub mod runner;
}
mod config {
    pub mod app_config;
    pub mod catalog_config;
    pub mod planner_config;
}
mod setup {
    pub mod dependency_injection;
}

use cli::args::Cli;
use cli::error::IntoCliError;
use cli::runner::{self, CliFailure};
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Meal planner entry point
///
/// Reads a plan request, builds the weekly plan against the food catalog and
/// prints the plan with its shopping list as JSON on stdout. Failures are
/// printed as `{name, message}` on stderr with a non-zero exit code.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter, on stderr so stdout stays JSON
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Load configuration
    let args = Cli::parse();
    let mut config = AppConfig::from_env();
    if let Some(path) = args.catalog {
        config.catalog.path = path;
    }

    // 4. Wire dependencies
    let container = match DependencyContainer::new(&config).await {
        Ok(container) => container,
        Err(e) => return report(e.into_cli_error()),
    };

    // 5. Run
    let request = match runner::load_request(&args.request).await {
        Ok(request) => request,
        Err(failure) => return report(failure),
    };
    match runner::run(&container, request).await {
        Ok(output) => {
            let json = if args.pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            println!("{}", json);
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => report(failure),
    }
}

fn report((status, response): CliFailure) -> anyhow::Result<ExitCode> {
    eprintln!("{}", serde_json::to_string(&response)?);
    Ok(status.into())
}
