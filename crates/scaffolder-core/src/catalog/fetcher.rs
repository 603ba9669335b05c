//! Catalog fetching from the GitHub contents API or a local manifest file
//!
//! The remote endpoint answers with a JSON envelope whose `content` field
//! holds the YAML manifest, base64-encoded and wrapped with newlines.
//! A local file is read as plain YAML (for development use).

use crate::error::CatalogError;
use crate::product::{CatalogKind, ProductConfig};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use std::path::PathBuf;
use tokio::fs;
use url::Url;

/// Catalog source - either remote base URL or local manifest file
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Remote(Url),
    Local(PathBuf),
}

impl CatalogSource {
    /// Create a remote catalog source from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self, CatalogError> {
        let url_str = std::env::var(config.catalog_url_env())
            .unwrap_or_else(|_| config.default_catalog_url().to_string());
        let url = Url::parse(&url_str).map_err(|_| CatalogError::InvalidUrl(url_str.clone()))?;
        Ok(Self::Remote(url))
    }

    /// Create a local catalog source from a manifest path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }
}

/// Body returned by `GET /repos/{owner}/{repo}/contents/{path}`
#[derive(Debug, Deserialize)]
struct ContentsEnvelope {
    content: Option<String>,
}

/// Catalog fetcher - retrieves the raw manifest for one catalog kind
pub struct CatalogFetcher {
    source: CatalogSource,
    kind: CatalogKind,
    client: reqwest::Client,
}

impl CatalogFetcher {
    /// Create a new fetcher with a custom user agent
    pub fn new(source: CatalogSource, kind: CatalogKind, user_agent: &str) -> Self {
        Self {
            source,
            kind,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a fetcher from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self, CatalogError> {
        let source = CatalogSource::from_config(config)?;
        Ok(Self::new(source, config.catalog_kind(), config.user_agent()))
    }

    /// Create a fetcher reading a local manifest file
    pub fn from_local<C: ProductConfig>(config: &C, path: PathBuf) -> Self {
        Self::new(
            CatalogSource::local(path),
            config.catalog_kind(),
            config.user_agent(),
        )
    }

    pub fn kind(&self) -> &CatalogKind {
        &self.kind
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Build a URL by appending a relative path, preserving query parameters
    fn build_url(base: &Url, path: &str) -> Result<Url, CatalogError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidUrl(base.to_string()))?
            .pop_if_empty()
            .extend(path.split('/'));
        Ok(url)
    }

    /// Fetch the manifest text. Issues exactly one request for remote sources.
    pub async fn fetch_catalog(&self) -> Result<String, CatalogError> {
        match &self.source {
            CatalogSource::Remote(base_url) => {
                let url = Self::build_url(base_url, self.kind.path)?;
                tracing::debug!(%url, "fetching catalog");

                let response = self
                    .client
                    .get(url.clone())
                    .header(reqwest::header::ACCEPT, "application/vnd.github+json")
                    .send()
                    .await
                    .map_err(|source| CatalogError::Transport {
                        url: url.clone(),
                        source,
                    })?;

                let status = response.status();
                tracing::debug!(%url, %status, "catalog response");
                if !status.is_success() {
                    return Err(CatalogError::Status { url, status });
                }

                let envelope: ContentsEnvelope =
                    response
                        .json()
                        .await
                        .map_err(|source| CatalogError::Envelope {
                            url: url.clone(),
                            source,
                        })?;

                let content = envelope
                    .content
                    .filter(|c| !c.trim().is_empty())
                    .ok_or(CatalogError::MissingContent { url })?;

                decode_content(&content)
            }
            CatalogSource::Local(path) => {
                tracing::debug!(path = %path.display(), "reading local catalog");
                fs::read_to_string(path)
                    .await
                    .map_err(|source| CatalogError::Read {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }
}

/// Decode the base64 `content` field; GitHub wraps it every 60 characters
fn decode_content(content: &str) -> Result<String, CatalogError> {
    let compact: String = content.split_whitespace().collect();
    let bytes = STANDARD.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}
