//! Titt - YouTube summarizer companion
//!
//! A CLI client for a local YouTube summarizer backend.
//!
//! The name "Titt" comes from the Norwegian word for "peek."
//!
//! # Overview
//!
//! Titt looks at the "active tab" (a URL and title handed in on the command
//! line), decides whether it shows a YouTube video, and if so dispatches
//! actions against a backend running at `http://localhost:5000`:
//!
//! - Fetch the video transcript
//! - Generate an overview plus a detailed summary
//! - Ask questions in a conversational Q&A session
//! - Render a mind map of the video
//! - Export a summary PDF
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `video` - YouTube URL classification and video references
//! - `chat` - Append-only conversational transcript
//! - `tab` - Active-tab snapshots and video-context resolution
//! - `backend` - HTTP client for the summarizer backend
//! - `dispatcher` - Per-action gating, requests and failure handling
//! - `config` - Configuration management
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use titt::backend::BackendClient;
//! use titt::config::Settings;
//! use titt::dispatcher::{Dispatcher, Fetched};
//! use titt::tab::FixedTab;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let tabs = Arc::new(FixedTab::new(
//!         "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
//!         "Some video",
//!     ));
//!     let dispatcher = Dispatcher::new(tabs, BackendClient::new(&settings.backend)?);
//!
//!     if let Fetched::Ok(summary) = dispatcher.summarize().await? {
//!         println!("{}", summary.overview);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod chat;
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod tab;
pub mod video;

pub use error::{Result, TittError};
