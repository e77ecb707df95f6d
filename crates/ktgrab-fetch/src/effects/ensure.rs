use std::path::{Path, PathBuf};

use ktgrab_platform::profile::{ArtifactSpec, PlatformProfile};
use ktgrab_platform::release::ReleaseLocation;

use crate::data::{FetchOptions, ProgressSink};
use crate::effects::fetcher::Fetcher;
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Artifacts of `profile` with no file under `storage_dir`.
///
/// A missing storage directory is not an error here; everything is
/// simply missing and directory creation happens lazily before the
/// first write. Presence is filesystem existence alone, which is why
/// failed downloads must never leave a partial file behind.
pub fn missing_artifacts<'a>(
    storage_dir: &Path,
    profile: &'a PlatformProfile,
) -> Vec<&'a ArtifactSpec> {
    profile
        .artifacts
        .iter()
        .filter(|artifact| !artifact.local_path(storage_dir).exists())
        .collect()
}

/// Ensure every artifact of `profile` exists under `storage_dir`,
/// downloading the missing subset sequentially in declared order.
///
/// Returns the entrypoint path. When nothing is missing no request is
/// issued and the path comes back immediately; the path depends only on
/// the profile and the storage directory, never on whether a download
/// happened this run.
pub async fn ensure_present<C: HttpClient>(
    fetcher: &Fetcher<C>,
    storage_dir: &Path,
    profile: &PlatformProfile,
    release: &ReleaseLocation,
    sink: &dyn ProgressSink,
) -> Result<PathBuf> {
    let entrypoint = profile.entrypoint_path(storage_dir);

    for artifact in missing_artifacts(storage_dir, profile) {
        let url = release
            .artifact_url(artifact.remote_name)
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        let options = FetchOptions::default()
            .executable(artifact.execute_bit)
            .label(format!("Downloading {}", artifact.local_name));
        tracing::info!(artifact = artifact.local_name, %url, "fetching missing artifact");
        fetcher
            .download(url, &artifact.local_path(storage_dir), &options, sink)
            .await?;
    }

    Ok(entrypoint)
}
