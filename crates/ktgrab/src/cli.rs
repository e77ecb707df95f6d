use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ktgrab_fetch::{Fetcher, NoopSink, ProgressSink, ReqwestClient, ensure_present};
use ktgrab_platform::os;
use ktgrab_platform::profile::PlatformProfile;
use ktgrab_platform::release::{KTLINT_VERSION, ReleaseLocation};

use crate::progress::BarSink;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "ktgrab",
    version = env!("CARGO_PKG_VERSION"),
    about = "Ensure the pinned ktlint release is present locally",
    long_about = None
)]
pub struct App {
    /// Directory the artifacts are stored in (defaults to ~/.ktgrab).
    #[arg(long, value_name = "DIR")]
    storage_dir: Option<PathBuf>,

    /// Suppress the progress bar.
    #[arg(short, long)]
    quiet: bool,
}

fn default_storage_dir() -> Result<PathBuf> {
    let base = home::home_dir().context("cannot locate home directory")?;
    Ok(base.join(".ktgrab"))
}

pub async fn run() -> Result<()> {
    let app = App::parse();
    let storage_dir = match app.storage_dir {
        Some(dir) => dir,
        None => default_storage_dir()?,
    };

    let profile = PlatformProfile::for_os(os::detect());
    let release = ReleaseLocation::pinned();
    let fetcher = Fetcher::new(ReqwestClient::new()?);

    let sink: Box<dyn ProgressSink> = if app.quiet {
        Box::new(NoopSink)
    } else {
        Box::new(BarSink::new())
    };

    tracing::info!(version = KTLINT_VERSION, dir = %storage_dir.display(), "ensuring ktlint is present");
    let entrypoint = ensure_present(&fetcher, &storage_dir, &profile, &release, sink.as_ref())
        .await
        .with_context(|| format!("failed to fetch ktlint {KTLINT_VERSION}"))?;

    println!("{}", entrypoint.display());
    Ok(())
}
