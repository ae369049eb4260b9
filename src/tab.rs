//! Active-tab resolution.
//!
//! The browser's tab-query capability is an external collaborator behind the
//! [`TabProvider`] trait: it hands back a point-in-time snapshot of the
//! active tab, with no subscription to later navigation. The resolver turns
//! a snapshot into a [`VideoContext`], which is recomputed before every
//! action and never cached.

use crate::error::Result;
use crate::video::{is_youtube_video_url, video_id_from_url, VideoReference, FALLBACK_TITLE};
use async_trait::async_trait;

/// Label shown when the active tab is not a recognized video page.
pub const NO_VIDEO_LABEL: &str = "No YouTube video detected";

/// Point-in-time snapshot of the active tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSnapshot {
    pub url: String,
    pub title: String,
}

/// Source of the active tab's current URL and title.
#[async_trait]
pub trait TabProvider: Send + Sync {
    /// Query the active tab. Each call returns a fresh snapshot.
    async fn active_tab(&self) -> Result<TabSnapshot>;
}

/// Tab provider backed by values given on the command line.
pub struct FixedTab {
    snapshot: TabSnapshot,
}

impl FixedTab {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            snapshot: TabSnapshot {
                url: url.into(),
                title: title.into(),
            },
        }
    }
}

#[async_trait]
impl TabProvider for FixedTab {
    async fn active_tab(&self) -> Result<TabSnapshot> {
        Ok(self.snapshot.clone())
    }
}

/// Whether the active tab is showing a video, and which one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoContext {
    Video(VideoReference),
    NoVideo,
}

impl VideoContext {
    pub fn is_video(&self) -> bool {
        matches!(self, VideoContext::Video(_))
    }
}

/// Resolve a tab snapshot into a video context.
///
/// A matching URL yields a [`VideoReference`] with the tab title (or the
/// fixed fallback when the title is empty) and the video ID when the URL
/// carries a `v=` parameter. Anything else is [`VideoContext::NoVideo`].
pub fn resolve(tab: &TabSnapshot) -> VideoContext {
    if !is_youtube_video_url(&tab.url) {
        return VideoContext::NoVideo;
    }

    let title = if tab.title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        tab.title.clone()
    };

    VideoContext::Video(VideoReference {
        url: tab.url.clone(),
        video_id: video_id_from_url(&tab.url).map(str::to_string),
        title,
    })
}
