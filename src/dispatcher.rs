//! Action dispatcher.
//!
//! Maps the user-initiated actions (transcribe, summarize, ask, mind-map,
//! PDF export) to backend calls. Every action re-resolves the video context
//! through the tab provider first; without a recognized video no request is
//! made. Backend failures are terminal per attempt: they surface as the
//! action's fixed user-facing message and are never propagated as errors.

use crate::backend::{BackendClient, MindMapNode};
use crate::chat::{ChatTranscript, ChatTurn};
use crate::error::{Result, TittError};
use crate::tab::{self, TabProvider, VideoContext};
use crate::video::VideoReference;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fixed failure message per action.
pub const TRANSCRIPT_FAILED: &str = "Failed to fetch transcript.";
pub const SUMMARY_FAILED: &str = "Failed to fetch summary.";
pub const ANSWER_FAILED: &str = "Failed to get response";
pub const MIND_MAP_FAILED: &str = "Failed to generate mind map.";
pub const PDF_FAILED: &str = "Failed to export PDF.";

/// Fallback text when a response field is absent.
pub const NO_TRANSCRIPT: &str = "No transcript available.";
pub const NO_OVERVIEW: &str = "No overview available.";
pub const NO_DETAILED_SUMMARY: &str = "No detailed summary available.";
pub const NO_ANSWER: &str = "No answer available.";

/// Outcome of one dispatched backend call: the payload, or the action's
/// fixed failure message. Gating failures (no video, empty question) are
/// returned as errors before any request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched<T> {
    Ok(T),
    Failed(&'static str),
}

/// A summary with both fields present, fallbacks applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub overview: String,
    pub detailed_summary: String,
}

/// Dispatches user actions against the backend.
///
/// Holds the session state: the tab-query collaborator, the backend client
/// and the chat transcript. The transcript lives only as long as the
/// dispatcher.
pub struct Dispatcher {
    tabs: Arc<dyn TabProvider>,
    backend: BackendClient,
    chat_log: ChatTranscript,
}

impl Dispatcher {
    pub fn new(tabs: Arc<dyn TabProvider>, backend: BackendClient) -> Self {
        Self {
            tabs,
            backend,
            chat_log: ChatTranscript::new(),
        }
    }

    /// Resolve the current video context from a fresh tab snapshot.
    pub async fn video_context(&self) -> Result<VideoContext> {
        let snapshot = self.tabs.active_tab().await?;
        Ok(tab::resolve(&snapshot))
    }

    /// Resolve the current video, or fail with [`TittError::NoVideo`].
    async fn current_video(&self) -> Result<VideoReference> {
        match self.video_context().await? {
            VideoContext::Video(reference) => Ok(reference),
            VideoContext::NoVideo => Err(TittError::NoVideo),
        }
    }

    /// Fetch the transcript for the current video.
    pub async fn transcribe(&self) -> Result<Fetched<String>> {
        let video = self.current_video().await?;
        debug!("Fetching transcript for {}", video.url);

        match self.backend.transcript(&video.url).await {
            Ok(response) => Ok(Fetched::Ok(
                response.transcript.unwrap_or_else(|| NO_TRANSCRIPT.to_string()),
            )),
            Err(e) => {
                warn!("Transcript request failed: {}", e);
                Ok(Fetched::Failed(TRANSCRIPT_FAILED))
            }
        }
    }

    /// Fetch the two-part summary for the current video.
    pub async fn summarize(&self) -> Result<Fetched<Summary>> {
        let video = self.current_video().await?;
        debug!("Fetching summary for {}", video.url);

        match self.backend.summarize(&video.url).await {
            Ok(response) => Ok(Fetched::Ok(Summary {
                overview: response.overview.unwrap_or_else(|| NO_OVERVIEW.to_string()),
                detailed_summary: response
                    .detailed_summary
                    .unwrap_or_else(|| NO_DETAILED_SUMMARY.to_string()),
            })),
            Err(e) => {
                warn!("Summary request failed: {}", e);
                Ok(Fetched::Failed(SUMMARY_FAILED))
            }
        }
    }

    /// Ask a question about the current video.
    ///
    /// The user turn is appended before the request goes out and remains in
    /// the transcript even when the request fails; the failure then becomes
    /// the bot turn. Returns the appended bot turn.
    pub async fn ask(&mut self, question: &str) -> Result<&ChatTurn> {
        let video = self.current_video().await?;

        let question = question.trim();
        if question.is_empty() {
            return Err(TittError::EmptyQuestion);
        }

        self.chat_log.push_user(question);
        debug!("Asking about {}: {}", video.url, question);

        let text = match self.backend.ask(&video.url, question).await {
            Ok(response) => response.answer.unwrap_or_else(|| NO_ANSWER.to_string()),
            Err(e) => {
                warn!("Ask request failed: {}", e);
                ANSWER_FAILED.to_string()
            }
        };

        Ok(self.chat_log.push_bot(text))
    }

    /// Fetch the mind-map tree for the current video.
    pub async fn mind_map(&self) -> Result<Fetched<MindMapNode>> {
        let video = self.current_video().await?;
        debug!("Fetching mind map for {}", video.url);

        match self.backend.mind_map(&video.url).await {
            Ok(tree) => Ok(Fetched::Ok(tree)),
            Err(e) => {
                warn!("Mind map request failed: {}", e);
                Ok(Fetched::Failed(MIND_MAP_FAILED))
            }
        }
    }

    /// Fetch the exported PDF for the current video.
    pub async fn export_pdf(&self) -> Result<Fetched<Vec<u8>>> {
        let video = self.current_video().await?;
        debug!("Exporting PDF for {}", video.url);

        match self.backend.export_pdf(&video.url).await {
            Ok(bytes) => Ok(Fetched::Ok(bytes)),
            Err(e) => {
                warn!("PDF export failed: {}", e);
                Ok(Fetched::Failed(PDF_FAILED))
            }
        }
    }

    /// The session chat transcript, in insertion order.
    pub fn chat_log(&self) -> &ChatTranscript {
        &self.chat_log
    }
}
