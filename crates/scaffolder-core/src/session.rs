//! One scaffold session: fetch, then plan, ask and merge
//!
//! Every step returns a [`ScaffoldError`] instead of exiting, so the caller
//! decides how to report and terminate. [`resolve_config`] needs the loaded
//! choices, so the catalog is always loaded before any question is planned.
//! A generator only ever receives the [`ScaffoldConfig`] that comes out of a
//! successful resolution.

use crate::catalog::{self, CatalogFetcher, ChoiceItem};
use crate::error::ScaffoldError;
use crate::product::CatalogKind;
use crate::questions::{self, Prompter, ScaffoldConfig};
use crate::request::ScaffoldRequest;

/// Fetch and normalize the catalog into selection rows
pub async fn load_choices(fetcher: &CatalogFetcher) -> Result<Vec<ChoiceItem>, ScaffoldError> {
    let noun = fetcher.kind().noun;
    let raw = fetcher
        .fetch_catalog()
        .await
        .map_err(|source| ScaffoldError::CatalogUnavailable { noun, source })?;
    catalog::normalize(&raw, fetcher.kind())
        .map_err(|source| ScaffoldError::CatalogUnavailable { noun, source })
}

/// Plan, ask and merge against an already loaded catalog
pub fn resolve_config<P: Prompter>(
    request: &ScaffoldRequest,
    choices: &[ChoiceItem],
    kind: &CatalogKind,
    prompter: &mut P,
) -> Result<ScaffoldConfig, ScaffoldError> {
    let planned = questions::plan(request, choices, kind);
    let answers = questions::resolve(&planned, prompter)?;
    questions::merge(request, &answers)
}
