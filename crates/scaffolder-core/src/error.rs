//! Error kinds that end a scaffold session

use crate::questions::QuestionId;
use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

/// Why the catalog could not be turned into choices
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to reach {url}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    Status { url: Url, status: StatusCode },

    #[error("Response from {url} is not a content envelope")]
    Envelope {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response from {url} has no content")]
    MissingContent { url: Url },

    #[error("Catalog content is not valid base64")]
    Base64(#[from] base64::DecodeError),

    #[error("Catalog content is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to parse catalog manifest")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

/// Fatal outcome of a scaffold session
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Failed to fetch {noun} data")]
    CatalogUnavailable {
        noun: &'static str,
        #[source]
        source: CatalogError,
    },

    #[error("Setup cancelled.")]
    InputAborted,

    #[error("Terminal interaction failed")]
    Terminal(#[source] std::io::Error),

    #[error("No value resolved for the {0} question")]
    Unresolved(QuestionId),

    #[error(transparent)]
    Generation(#[from] anyhow::Error),
}

impl ScaffoldError {
    /// Map a prompt I/O error, treating an interrupt as a user abort
    pub fn from_prompt(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::Interrupted {
            ScaffoldError::InputAborted
        } else {
            ScaffoldError::Terminal(err)
        }
    }
}
