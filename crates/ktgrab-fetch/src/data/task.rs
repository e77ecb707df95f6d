use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{FetchError, MAX_REDIRECTS, Result};

/// Loop state for one logical download.
///
/// Redirects advance the task with [`DownloadTask::follow`]; carrying
/// the depth here keeps the bound testable without any network and the
/// call stack flat no matter how long the redirect chain is.
#[derive(Debug, Clone)]
pub struct DownloadTask {
    origin: Url,
    url: Url,
    dest: PathBuf,
    redirect_depth: u8,
}

impl DownloadTask {
    pub fn new(url: Url, dest: impl Into<PathBuf>) -> Self {
        Self {
            origin: url.clone(),
            url,
            dest: dest.into(),
            redirect_depth: 0,
        }
    }

    /// The URL the task was created with, before any redirects.
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// The URL of the current attempt.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }

    pub fn redirect_depth(&self) -> u8 {
        self.redirect_depth
    }

    /// Advance to a redirect target, failing once the budget is spent.
    ///
    /// The error names the origin URL rather than the most recent hop.
    pub fn follow(self, next: Url) -> Result<Self> {
        if self.redirect_depth >= MAX_REDIRECTS {
            return Err(FetchError::TooManyRedirects {
                url: self.origin.to_string(),
            });
        }
        Ok(Self {
            url: next,
            redirect_depth: self.redirect_depth + 1,
            ..self
        })
    }
}
