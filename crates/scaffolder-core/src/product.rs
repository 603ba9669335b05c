//! Product configuration for CLI binaries
//!
//! Both scaffolding CLIs (`create-strapi-app`, `create-strapi-starter`) share
//! one prompt engine. What differs between them is captured here: which
//! catalog they read, what the selection question says, and how the binary
//! presents itself.

/// Default base URL of the community content repository (GitHub contents API)
pub const DEFAULT_CATALOG_URL: &str =
    "https://api.github.com/repos/strapi/community-content/contents";

/// Which remote catalog a product reads and how its entries are labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogKind {
    /// Path of the manifest below the catalog base URL
    pub path: &'static str,
    /// Word removed from entry titles when building choice labels
    pub title_suffix: &'static str,
    /// Singular noun used in user-facing messages ("template", "starter")
    pub noun: &'static str,
    /// Message of the selection question
    pub selection_prompt: &'static str,
}

impl CatalogKind {
    /// General-purpose project templates
    pub const TEMPLATES: CatalogKind = CatalogKind {
        path: "templates/templates.yml",
        title_suffix: "Template",
        noun: "template",
        selection_prompt: "Would you like to use a template? (Templates are Strapi configurations designed for a specific use case)",
    };

    /// Fullstack starters
    pub const STARTERS: CatalogKind = CatalogKind {
        path: "starters/starters.yml",
        title_suffix: "Starter",
        noun: "starter",
        selection_prompt: "Which starter would you like to use? (Starters are fullstack Strapi applications designed for a specific use case)",
    };
}

/// Configuration trait for different CLI products
///
/// Each binary implements this trait to define:
/// - Product identity (name, display name)
/// - The catalog it offers choices from
/// - Where that catalog lives and how to override it
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, user agent)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Catalog read by this product
    fn catalog_kind(&self) -> CatalogKind;

    /// Base URL the catalog path is appended to
    fn default_catalog_url(&self) -> &'static str {
        DEFAULT_CATALOG_URL
    }

    /// Environment variable name for overriding the catalog base URL
    fn catalog_url_env(&self) -> &'static str;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
