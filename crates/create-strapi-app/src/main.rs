//! create-strapi-app - Create a Strapi application, optionally from a template

use anyhow::Result;
use clap::Parser;
use scaffolder_core::cli::CommonArgs;
use scaffolder_core::tui::{CreateArgs, CANCELLED_EXIT_CODE};
use scaffolder_core::{CatalogKind, ProductConfig};
use tracing_subscriber::EnvFilter;

/// Template catalog product configuration
#[derive(Clone)]
pub struct StrapiAppConfig;

impl ProductConfig for StrapiAppConfig {
    fn name(&self) -> &'static str {
        "create-strapi-app"
    }

    fn display_name(&self) -> &'static str {
        "Create Strapi App"
    }

    fn catalog_kind(&self) -> CatalogKind {
        CatalogKind::TEMPLATES
    }

    fn catalog_url_env(&self) -> &'static str {
        "STRAPI_TEMPLATES_URL"
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-strapi-app")]
#[command(about = "Create a new Strapi application")]
#[command(version)]
pub struct Args {
    /// Project name and directory
    pub directory: Option<String>,

    /// Specify a Strapi template (GitHub repository URL)
    #[arg(long, value_name = "TEMPLATEURL")]
    pub template: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            project_name: args.directory,
            template: args.template,
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
    let config = StrapiAppConfig;

    let result = scaffolder_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
