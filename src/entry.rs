//! The value type returned by tag searches.
//!
//! A `BookmarkEntry` is built by the feed parser from one `<item>` of the
//! search feed and is read-only for callers.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One bookmarked article from a tag search feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookmarkEntry {
    pub(crate) title: String,
    pub(crate) link: String,
    pub(crate) description: String,
    pub(crate) content: String,
    pub(crate) published_at: Option<DateTime<Utc>>,
    pub(crate) bookmark_count: u64,
}

impl BookmarkEntry {
    /// Article title; empty if the feed left it out.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Absolute URL of the article.
    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Full `content:encoded` body, usually HTML.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Timestamp from `dc:date`.
    ///
    /// `None` means the feed did not supply a date; a malformed date fails
    /// the whole search instead.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    /// Number of users who bookmarked the article.
    pub fn bookmark_count(&self) -> u64 {
        self.bookmark_count
    }
}
