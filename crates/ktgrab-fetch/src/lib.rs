//! HTTP artifact fetching with bounded redirects and streaming progress.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and progress types
//! - [`core`] - Pure transformations (redirect classification and resolution)
//! - [`effects`] - I/O operations behind the [`HttpClient`] trait
//!
//! # Key Features
//!
//! - **Manual Redirects**: The HTTP client never follows redirects itself;
//!   the download loop carries depth as [`DownloadTask`] state, bounded at
//!   [`MAX_REDIRECTS`]
//! - **Clean Failure**: Partial files are deleted on every failure path, so
//!   a later presence check never mistakes a truncated file for a complete one
//! - **Mechanism-Only**: No policy; caller handles progress UI and retry
//!   orchestration

mod core;
mod data;
mod effects;
mod error;

pub use core::{is_redirect, resolve_redirect};
pub use data::{DownloadTask, FetchOptions, FetchPhase, NoopSink, Progress, ProgressSink};
pub use effects::{BoxStream, Fetcher, HttpClient, HttpResponse, ensure_present, missing_artifacts};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{FetchError, MAX_REDIRECTS, Result};
