use std::path::Path;

use futures_util::StreamExt;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::core::{is_redirect, resolve_redirect};
use crate::data::{DownloadTask, FetchOptions, FetchPhase, Progress, ProgressSink};
use crate::effects::http::{HttpClient, HttpResponse};
use crate::error::{FetchError, Result};

/// Downloads artifacts over an [`HttpClient`], one at a time.
pub struct Fetcher<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Access the underlying HTTP client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Download `url` to `dest`.
    ///
    /// Follows up to [`MAX_REDIRECTS`](crate::MAX_REDIRECTS) redirects,
    /// streams the body to disk with per-chunk progress, and deletes the
    /// partial file on every failure path. On success the file is
    /// complete and, when `options.executable` is set, carries
    /// owner-execute permission.
    pub async fn download(
        &self,
        url: Url,
        dest: &Path,
        options: &FetchOptions,
        sink: &dyn ProgressSink,
    ) -> Result<()> {
        let mut task = DownloadTask::new(url, dest);

        sink.report(&Progress {
            phase: FetchPhase::Starting,
            message: options.label.clone(),
            bytes_downloaded: 0,
            total_bytes: None,
        });

        loop {
            let response = self
                .client
                .get(task.url())
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            if is_redirect(response.status) {
                // Redirect bodies are dropped unread.
                let Some(location) = response.location else {
                    return Err(FetchError::RedirectMissingLocation {
                        url: task.url().to_string(),
                    });
                };
                let next = resolve_redirect(task.url(), &location)?;
                tracing::debug!(%next, depth = task.redirect_depth() + 1, "following redirect");
                task = task.follow(next)?;
                continue;
            }

            if response.status != 200 {
                remove_partial(dest).await;
                return Err(FetchError::UnexpectedStatus {
                    status: response.status,
                    url: task.url().to_string(),
                });
            }

            return self.stream_to_disk(response, &task, options, sink).await;
        }
    }

    /// Stream a 200 response's body to the task's destination.
    ///
    /// The file handle is dropped on every exit path before any cleanup
    /// deletion is attempted.
    async fn stream_to_disk(
        &self,
        response: HttpResponse<C::Error>,
        task: &DownloadTask,
        options: &FetchOptions,
        sink: &dyn ProgressSink,
    ) -> Result<()> {
        let dest = task.dest();
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| FetchError::io(parent, e))?;
        }

        let total_bytes = response.content_length;
        let mut body = response.body;
        let mut file = fs::File::create(dest)
            .await
            .map_err(|e| FetchError::io(dest, e))?;
        let mut bytes_downloaded = 0u64;

        while let Some(chunk) = body.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    drop(file);
                    remove_partial(dest).await;
                    return Err(FetchError::Transport(e.to_string()));
                }
            };
            if let Err(e) = file.write_all(&chunk).await {
                drop(file);
                remove_partial(dest).await;
                return Err(FetchError::io(dest, e));
            }
            bytes_downloaded += chunk.len() as u64;
            sink.report(&Progress {
                phase: FetchPhase::Downloading,
                message: options.label.clone(),
                bytes_downloaded,
                total_bytes,
            });
        }

        if let Err(e) = file.flush().await {
            drop(file);
            remove_partial(dest).await;
            return Err(FetchError::io(dest, e));
        }
        drop(file);

        if options.executable {
            // Some filesystems have no mode bits; not fatal.
            if let Err(e) = ktgrab_platform::perms::make_executable(dest) {
                tracing::debug!(path = %dest.display(), error = %e, "chmod failed");
            }
        }

        sink.report(&Progress {
            phase: FetchPhase::Completed,
            message: options.label.clone(),
            bytes_downloaded,
            total_bytes,
        });
        Ok(())
    }
}

/// Best-effort removal of a partially written destination.
async fn remove_partial(dest: &Path) {
    if let Err(e) = fs::remove_file(dest).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %dest.display(), error = %e, "failed to remove partial file");
        }
    }
}
