use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bookquiz::BookInfo;
use bookquiz::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "bookquiz")]
#[command(about = "Forest of Books - a timed book quiz with levels, badges and a hall of fame")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.bookquiz/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the game on the home screen
    Play,

    /// Show the hall of fame
    Leaderboard,

    /// Show badges and how close you are to each
    Achievements,

    /// Show level, XP, streaks and accuracy
    Stats,

    /// Delete saved stats and the hall of fame
    Reset,

    /// Write a default ~/.bookquiz/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate one question for a book with the configured generator
    Generate {
        /// Book title
        #[arg(long)]
        title: String,

        /// Book author
        #[arg(long)]
        author: String,

        /// Short description of the book
        #[arg(long, default_value = "")]
        description: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout belongs to the game
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config;
    let load_config = || Config::load(config_path.as_deref());

    match cli.command {
        Some(Commands::Play) | None => {
            cli::play::play_command(&load_config()?).await?;
        }
        Some(Commands::Leaderboard) => {
            cli::board::leaderboard_command(&load_config()?);
        }
        Some(Commands::Achievements) => {
            cli::board::achievements_command(&load_config()?);
        }
        Some(Commands::Stats) => {
            cli::board::stats_command(&load_config()?);
        }
        Some(Commands::Reset) => {
            cli::reset::reset_command(&load_config()?)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(config_path.clone(), force)?;
        }
        Some(Commands::Generate {
            title,
            author,
            description,
        }) => {
            let book = BookInfo {
                title,
                author,
                description,
            };
            cli::generate::generate_command(&load_config()?, &book).await?;
        }
    }

    Ok(())
}
