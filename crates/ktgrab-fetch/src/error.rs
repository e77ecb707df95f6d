//! Error types for ktgrab-fetch.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Redirect budget for one logical download.
pub const MAX_REDIRECTS: u8 = 5;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("redirect response missing Location header: {url}")]
    RedirectMissingLocation { url: String },

    #[error("too many redirects while downloading: {url}")]
    TooManyRedirects { url: String },

    #[error("download failed with status code {status}: {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("network error: {0}")]
    Transport(String),

    #[error("file I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
