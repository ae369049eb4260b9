//! Titt CLI entry point.

use anyhow::Result;
use clap::Parser;
use titt::cli::{commands, Cli, Commands};
use titt::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("titt={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Execute command
    match &cli.command {
        Commands::Transcript { url, title, output } => {
            commands::run_transcript(url, title.clone(), output.clone(), settings).await?;
        }

        Commands::Summarize { url, title } => {
            commands::run_summarize(url, title.clone(), settings).await?;
        }

        Commands::Ask { url, question, title } => {
            commands::run_ask(url, question, title.clone(), settings).await?;
        }

        Commands::Chat { url, title } => {
            commands::run_chat(url, title.clone(), settings).await?;
        }

        Commands::Mindmap { url, title } => {
            commands::run_mindmap(url, title.clone(), settings).await?;
        }

        Commands::Export { url, title, output } => {
            commands::run_export(url, title.clone(), output.clone(), settings).await?;
        }

        Commands::Doctor => {
            commands::run_doctor(settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings)?;
        }
    }

    Ok(())
}
