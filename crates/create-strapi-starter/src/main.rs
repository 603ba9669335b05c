//! create-strapi-starter - Create a fullstack Strapi application from a starter

use anyhow::Result;
use clap::Parser;
use scaffolder_core::cli::CommonArgs;
use scaffolder_core::tui::{CreateArgs, CANCELLED_EXIT_CODE};
use scaffolder_core::{CatalogKind, ProductConfig};
use tracing_subscriber::EnvFilter;

/// Starter catalog product configuration
#[derive(Clone)]
pub struct StrapiStarterConfig;

impl ProductConfig for StrapiStarterConfig {
    fn name(&self) -> &'static str {
        "create-strapi-starter"
    }

    fn display_name(&self) -> &'static str {
        "Create Strapi Starter"
    }

    fn catalog_kind(&self) -> CatalogKind {
        CatalogKind::STARTERS
    }

    fn catalog_url_env(&self) -> &'static str {
        "STRAPI_STARTERS_URL"
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-strapi-starter")]
#[command(about = "Create a fullstack Strapi application from a starter")]
#[command(version)]
pub struct Args {
    /// Project name and directory
    pub directory: Option<String>,

    /// Starter to use (GitHub repository URL)
    #[arg(value_name = "STARTERURL")]
    pub starter: Option<String>,

    /// Starter to use, as a flag instead of the second positional argument
    #[arg(long = "starter", value_name = "URL", conflicts_with = "starter")]
    pub starter_url: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            project_name: args.directory,
            template: args.starter.or(args.starter_url),
            common: args.common,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(CANCELLED_EXIT_CODE);
    })
    .ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = StrapiStarterConfig;

    let result = scaffolder_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
