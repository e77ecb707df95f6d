//! Immutable data types for fetch operations.
//!
//! Configuration, progress events and redirect-loop state. These types
//! carry no I/O; they are passed between functions without mutation.

pub mod options;
pub mod progress;
pub mod task;

pub use options::FetchOptions;
pub use progress::{FetchPhase, NoopSink, Progress, ProgressSink};
pub use task::DownloadTask;
