//! YouTube URL classification.
//!
//! Recognizes watch URLs and short links, and extracts the 11-character
//! video ID from the `v=` query parameter.

use regex::Regex;
use std::sync::LazyLock;

/// Thumbnail image host used by YouTube for every public video.
const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";

/// Fallback title shown when the tab reports an empty title.
pub const FALLBACK_TITLE: &str = "Current YouTube Video";

// Matches watch URLs and short links from the start of the string.
// Trailing characters after the 11-character token are permitted.
static WATCH_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/)[a-zA-Z0-9_-]{11}")
        .expect("Invalid regex")
});

// Extracts the value of a `v=` query parameter, up to the next `&` or `#`.
static VIDEO_ID_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([^&#]+)").expect("Invalid regex"));

/// Check whether a URL is a YouTube video page.
///
/// Accepts `youtube.com/watch?v=<id>` and `youtu.be/<id>` forms, with an
/// optional scheme and `www.` prefix. The input is matched as-is; no
/// trimming or case normalization is applied.
pub fn is_youtube_video_url(url: &str) -> bool {
    WATCH_URL.is_match(url)
}

/// Extract the video ID from a YouTube URL.
///
/// Only the `v=` query-parameter form is recognized, so short links
/// (`youtu.be/<id>`) yield `None` even though [`is_youtube_video_url`]
/// accepts them.
pub fn video_id_from_url(url: &str) -> Option<&str> {
    VIDEO_ID_PARAM
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// A resolved reference to the video shown in the active tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
    /// The tab URL the reference was resolved from.
    pub url: String,
    /// The 11-character video ID, when extractable from the URL.
    pub video_id: Option<String>,
    /// Display title, with the fixed fallback applied when the tab had none.
    pub title: String,
}

impl VideoReference {
    /// Deterministic thumbnail URL for the video, when the ID is known.
    pub fn thumbnail_url(&self) -> Option<String> {
        self.video_id
            .as_deref()
            .map(|id| format!("{}/{}/0.jpg", THUMBNAIL_BASE, id))
    }
}
