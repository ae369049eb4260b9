//! HTTP client for the summarizer backend.
//!
//! Every action maps to exactly one POST against a fixed path on the local
//! backend, with a JSON body carrying the video link (plus the question for
//! `/ask`). Responses are deserialized here; fallback text for absent fields
//! is applied by the dispatcher.

use crate::config::BackendSettings;
use crate::error::{Result, TittError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Request body shared by the link-only actions.
#[derive(Debug, Serialize)]
struct LinkRequest<'a> {
    link: &'a str,
}

/// Request body for the ask action.
#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    link: &'a str,
    question: &'a str,
}

/// Response from `/transcript`.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptResponse {
    pub transcript: Option<String>,
}

/// Response from `/summarize`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    pub overview: Option<String>,
    pub detailed_summary: Option<String>,
}

/// Response from `/ask`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerResponse {
    pub answer: Option<String>,
}

/// One node of the `/mindmap` tree.
///
/// The backend returns an arbitrary hierarchical tree in the
/// `{name, children}` shape; unknown extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MindMapNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub children: Vec<MindMapNode>,
}

impl MindMapNode {
    /// Total number of nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(MindMapNode::node_count).sum::<usize>()
    }

    /// Depth of the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(MindMapNode::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Client for the local summarizer backend.
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Build a client from settings. Fails if the base URL does not parse.
    pub fn new(settings: &BackendSettings) -> Result<Self> {
        let base_url = Url::parse(&settings.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = settings.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let http = builder.build()?;

        Ok(Self { http, base_url })
    }

    /// Fetch the raw transcript for a video.
    pub async fn transcript(&self, link: &str) -> Result<TranscriptResponse> {
        self.post_json("/transcript", &LinkRequest { link }).await
    }

    /// Fetch the two-part summary for a video.
    pub async fn summarize(&self, link: &str) -> Result<SummaryResponse> {
        self.post_json("/summarize", &LinkRequest { link }).await
    }

    /// Ask a question about a video.
    pub async fn ask(&self, link: &str, question: &str) -> Result<AnswerResponse> {
        self.post_json("/ask", &AskRequest { link, question }).await
    }

    /// Fetch the mind-map node tree for a video.
    pub async fn mind_map(&self, link: &str) -> Result<MindMapNode> {
        self.post_json("/mindmap", &LinkRequest { link }).await
    }

    /// Fetch the exported PDF as raw bytes.
    pub async fn export_pdf(&self, link: &str) -> Result<Vec<u8>> {
        let url = self.endpoint("/export-pdf")?;
        debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .json(&LinkRequest { link })
            .send()
            .await?
            .error_for_status()?;

        Ok(response.bytes().await?.to_vec())
    }

    /// Probe the backend for reachability. Any HTTP response counts; only a
    /// transport-level failure is an error.
    pub async fn probe(&self) -> Result<()> {
        self.http
            .get(self.base_url.clone())
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .map_err(|e| TittError::Backend(format!("Backend not reachable: {}", e)))?;
        Ok(())
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: for<'de> Deserialize<'de>,
    {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}
