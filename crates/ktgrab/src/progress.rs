//! Terminal progress bar sink.

use indicatif::{ProgressBar, ProgressStyle};
use ktgrab_fetch::{FetchPhase, Progress, ProgressSink};
use once_cell::sync::Lazy;
use std::sync::Mutex;

const PB_STYLE: &str =
    "{spinner:.blue} {msg:.cyan} [{elapsed_precise}] {wide_bar:.cyan/blue} {bytes}/{total_bytes}";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    match ProgressStyle::with_template(PB_STYLE) {
        Ok(style) => Some(style.tick_chars(TICK).progress_chars(PB_CHARS)),
        Err(_) => None,
    }
});

/// One bar per in-flight artifact; each Starting event replaces it.
pub struct BarSink {
    bar: Mutex<ProgressBar>,
}

impl BarSink {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(ProgressBar::hidden()),
        }
    }

    fn fresh_bar(msg: String) -> ProgressBar {
        let pb = ProgressBar::no_length();
        let pb = match PB_TEMPLATE.as_ref() {
            Some(style) => pb.with_style(style.clone()),
            None => pb,
        };
        pb.with_message(msg)
    }
}

impl Default for BarSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for BarSink {
    fn report(&self, progress: &Progress) {
        let Ok(mut bar) = self.bar.lock() else {
            return;
        };
        match progress.phase {
            FetchPhase::Starting => {
                *bar = Self::fresh_bar(progress.message.clone());
            }
            FetchPhase::Downloading => {
                if bar.length().is_none() {
                    if let Some(total) = progress.total_bytes {
                        bar.set_length(total);
                    }
                }
                bar.set_position(progress.bytes_downloaded);
            }
            FetchPhase::Completed => {
                bar.set_position(progress.bytes_downloaded);
                bar.finish_with_message(format!("{} done", progress.message));
            }
        }
    }
}
