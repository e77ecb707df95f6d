use std::fmt;

/// Phases of a download operation.
///
/// Downloads progress through these phases in order:
/// Starting → Downloading → Completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// Request issued, waiting for response headers.
    #[default]
    Starting,

    /// Actively streaming body chunks to disk.
    Downloading,

    /// Terminal state for a successful download.
    Completed,
}

impl fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchPhase::Starting => write!(f, "Starting"),
            FetchPhase::Downloading => write!(f, "Downloading"),
            FetchPhase::Completed => write!(f, "Completed"),
        }
    }
}

/// A snapshot of one download's state, handed to the progress sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// Current phase of the download.
    pub phase: FetchPhase,

    /// Human-readable narration, e.g. which artifact is being fetched.
    pub message: String,

    /// Bytes written to the destination so far.
    pub bytes_downloaded: u64,

    /// Total expected bytes, if known from the Content-Length header.
    ///
    /// `None` when the server doesn't declare a length (e.g. chunked
    /// transfer encoding); no percentage is fabricated in that case.
    pub total_bytes: Option<u64>,
}

impl Progress {
    /// Rounded completion percentage.
    ///
    /// Returns `None` when the total is unknown; otherwise the value is
    /// clamped to 0..=100.
    #[must_use]
    pub fn percentage(&self) -> Option<u8> {
        self.total_bytes.map(|total| {
            if total == 0 {
                // Empty files count as done only once the stream completed.
                if self.phase == FetchPhase::Completed { 100 } else { 0 }
            } else {
                let pct = (self.bytes_downloaded as f64 / total as f64) * 100.0;
                pct.round().clamp(0.0, 100.0) as u8
            }
        })
    }
}

/// Consumer of progress events.
///
/// Implementations must tolerate being a no-op and must not block the
/// download on slow consumption; events are fire-and-forget.
pub trait ProgressSink: Send + Sync {
    fn report(&self, progress: &Progress);
}

/// Sink that discards every event, for headless callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn report(&self, _progress: &Progress) {}
}
