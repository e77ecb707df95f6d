use anyhow::Result;

mod cli;
mod logging;
mod progress;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    cli::run().await
}
