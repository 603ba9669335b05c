//! Command-line flags shared by both scaffolding binaries

use crate::request::{DatabaseOptions, GeneratorFlags};
use clap::Args;
use std::path::PathBuf;

/// Flags common to `create-strapi-app` and `create-strapi-starter`
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Quickstart app creation (`--quickstart=false` picks custom without asking)
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub quickstart: Option<bool>,

    /// Do not start the application after it is created
    #[arg(long = "no-run")]
    pub no_run: bool,

    /// Force usage of npm instead of yarn to create the project
    #[arg(long = "use-npm")]
    pub use_npm: bool,

    /// Display database connection error
    #[arg(long)]
    pub debug: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Local catalog manifest to use instead of fetching from remote (for development use)
    #[arg(long = "catalog-file")]
    pub catalog_file: Option<PathBuf>,

    /// Print the resolved configuration instead of running the generator
    #[arg(long = "print-config")]
    pub print_config: bool,
}

/// Database connection flags
#[derive(Args, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// Database client
    #[arg(long)]
    pub dbclient: Option<String>,

    /// Database host
    #[arg(long)]
    pub dbhost: Option<String>,

    /// Database srv
    #[arg(long)]
    pub dbsrv: Option<String>,

    /// Database port
    #[arg(long)]
    pub dbport: Option<String>,

    /// Database name
    #[arg(long)]
    pub dbname: Option<String>,

    /// Database username
    #[arg(long)]
    pub dbusername: Option<String>,

    /// Database password
    #[arg(long)]
    pub dbpassword: Option<String>,

    /// Database SSL
    #[arg(long)]
    pub dbssl: Option<String>,

    /// Authentication Database
    #[arg(long)]
    pub dbauth: Option<String>,

    /// Database file path for sqlite
    #[arg(long)]
    pub dbfile: Option<String>,

    /// Overwrite database content if any
    #[arg(long)]
    pub dbforce: bool,
}

impl From<DatabaseArgs> for DatabaseOptions {
    fn from(args: DatabaseArgs) -> Self {
        DatabaseOptions {
            client: args.dbclient,
            host: args.dbhost,
            srv: args.dbsrv,
            port: args.dbport,
            name: args.dbname,
            username: args.dbusername,
            password: args.dbpassword,
            ssl: args.dbssl,
            auth: args.dbauth,
            file: args.dbfile,
            force: args.dbforce,
        }
    }
}

impl CommonArgs {
    /// Flags forwarded to the generator untouched
    pub fn generator_flags(&self) -> GeneratorFlags {
        GeneratorFlags {
            run: !self.no_run,
            use_npm: self.use_npm,
            debug: self.debug,
            database: self.database.clone().into(),
        }
    }
}
