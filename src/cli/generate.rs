//! Generate command implementation

use anyhow::{Context, Result, bail};
use std::time::Duration;

use bookquiz::BookInfo;
use bookquiz::config::Config;
use bookquiz::generator::{CommandGenerator, generate_or_fallback};

/// Ask the configured generator for a question about `book` and print it
/// as JSON. Generation failures print the fallback question instead.
pub async fn generate_command(config: &Config, book: &BookInfo) -> Result<()> {
    let Some(generator) = CommandGenerator::from_settings(&config.generator) else {
        bail!("No generator configured. Set [generator] command in the config file.");
    };

    let timeout = Duration::from_secs(config.generator.timeout_secs);
    let item = generate_or_fallback(&generator, book, timeout).await;

    let json = serde_json::to_string_pretty(&item).context("Failed to serialize question")?;
    println!("{}", json);
    Ok(())
}
