//! Scaffolder Core - Shared library for the Strapi scaffolding CLIs
//!
//! This library decides which questions a scaffold session still has to ask,
//! asks them, and merges the answers with the command-line flags into one
//! [`ScaffoldConfig`] for the project generator. It is used by two binaries
//! (`create-strapi-app`, `create-strapi-starter`) that differ only in the
//! catalog they offer.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Catalog fetching/normalizing, question planning, merging
//! - **Layer 2: Session Orchestration** - `ProductConfig` trait, `session` and the `Prompter`/`Generator` seams
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{session, CatalogFetcher, ScaffoldRequest};
//!
//! let fetcher = CatalogFetcher::from_config(&MyConfig)?;
//! let choices = session::load_choices(&fetcher).await?;
//! let config = session::resolve_config(&request, &choices, fetcher.kind(), &mut my_prompter)?;
//! my_generator.generate(&config).await?;
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod generator;
pub mod product;
pub mod questions;
pub mod request;
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{CatalogFetcher, CatalogSource, Choice, ChoiceItem};
pub use error::{CatalogError, ScaffoldError};
pub use generator::{CommandGenerator, Generator, PrintGenerator, SelectedGenerator};
pub use product::{CatalogKind, ProductConfig};
pub use questions::{Prompter, QuestionId, QuestionSpec, ResolvedAnswers, ScaffoldConfig};
pub use request::{DatabaseOptions, GeneratorFlags, ScaffoldRequest};

#[cfg(feature = "tui")]
pub use tui::run;
