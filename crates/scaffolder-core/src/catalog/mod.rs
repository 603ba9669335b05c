//! Remote catalog of templates and starters
//!
//! This module provides:
//! - Fetching the raw manifest (remote contents API or local file)
//! - Parsing and normalizing manifest entries into selectable choices

pub mod fetcher;
pub mod manifest;

pub use fetcher::{CatalogFetcher, CatalogSource};
pub use manifest::{normalize, CatalogEntry, Choice, ChoiceItem, REPOSITORY_HOST};
