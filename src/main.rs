use crate::config::Cli;
use crate::extractor::ListingExtractor;
use crate::processor::process_folder;
use crate::vision::OpenAiVisionClient;
use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod extractor;
mod processor;
mod spreadsheets;
mod vision;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables win
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = cli.vision_config()?;
    let client = OpenAiVisionClient::new(config).context("Failed to build HTTP client")?;
    let extractor = ListingExtractor::new(client);

    let summary = process_folder(&extractor, &cli.input, &cli.output)
        .with_context(|| format!("Failed to process folder {}", cli.input.display()))?;

    info!(
        "🏁 Processing complete. Results saved to {} ({} written, {} failed)",
        cli.output.display(),
        summary.written,
        summary.failed
    );

    Ok(())
}
