use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use flip_menu_cli::commands::{
    catalog_cmd::{self, CatalogArgs},
    embed_cmd::{self, EmbedArgs},
    settings_cmd::{self, SettingsArgs},
};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Flip Menu CLI: manage shops, menu pages and API access
#[derive(Parser)]
#[command(name = "flip-menu")]
#[command(about = "Manage flip menu shops, pages and API access", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or change the public API settings
    Settings(SettingsArgs),

    /// Manage shops and their menu pages
    Catalog(CatalogArgs),

    /// Print the widget embed code for a shop
    EmbedCode(EmbedArgs),

    /// Show the CLI version
    Version,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("FLIP_MENU_LOG"))
        .init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Settings(args) => settings_cmd::execute(args),
        Commands::Catalog(args) => catalog_cmd::execute(args).await,
        Commands::EmbedCode(args) => embed_cmd::execute(args).await,
        Commands::Version => Ok(format!("flip-menu version {}", env!("CARGO_PKG_VERSION"))),
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("Error: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
