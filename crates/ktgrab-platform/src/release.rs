//! Pinned release coordinates.

use url::Url;

use crate::error::{Error, Result};

/// Release version this build fetches. Changing it is a build-time
/// configuration change, not a runtime parameter.
pub const KTLINT_VERSION: &str = "1.8.0";

const RELEASE_HOST: &str = "https://github.com/pinterest/ktlint/releases/download";

/// Where a release's artifacts live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseLocation {
    base_url: String,
}

impl ReleaseLocation {
    /// The location pinned into this build.
    pub fn pinned() -> Self {
        Self::for_version(KTLINT_VERSION)
    }

    pub fn for_version(version: &str) -> Self {
        Self {
            base_url: format!("{RELEASE_HOST}/{version}"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for one artifact of this release.
    pub fn artifact_url(&self, remote_name: &str) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url, remote_name);
        Url::parse(&raw).map_err(|_| Error::InvalidReleaseUrl(raw))
    }
}
