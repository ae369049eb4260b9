//! CLI module for Titt.

pub mod commands;
mod output;

pub use output::{render_mind_map, Output};

use clap::{Parser, Subcommand};

/// Titt - YouTube summarizer companion
///
/// A CLI client for a local YouTube summarizer backend. The name "Titt"
/// comes from the Norwegian word for "peek."
#[derive(Parser, Debug)]
#[command(name = "titt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the transcript of a YouTube video
    Transcript {
        /// URL of the active tab
        url: String,

        /// Title of the active tab (falls back to a fixed label)
        #[arg(short, long)]
        title: Option<String>,

        /// Write the transcript to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate an overview and a detailed summary of a video
    Summarize {
        /// URL of the active tab
        url: String,

        /// Title of the active tab
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Ask a single question about a video
    Ask {
        /// URL of the active tab
        url: String,

        /// The question to ask
        question: String,

        /// Title of the active tab
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Start an interactive Q&A session about a video
    Chat {
        /// URL of the active tab
        url: String,

        /// Title of the active tab
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Generate and render a mind map of a video
    Mindmap {
        /// URL of the active tab
        url: String,

        /// Title of the active tab
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Export a video summary as PDF
    Export {
        /// URL of the active tab
        url: String,

        /// Title of the active tab
        #[arg(short, long)]
        title: Option<String>,

        /// Output file (defaults to the configured PDF filename)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check configuration and backend reachability
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "backend.base_url")
        key: String,
        /// Configuration value
        value: String,
    },

    /// Show configuration file path
    Path,
}
