//! The public client.
//!
//! [`BookmarkClient`] ties the pieces together: build the request URL
//! ([`crate::endpoint`]), fetch it ([`Fetcher`]), parse the body
//! ([`crate::parse`]).  Every call is one blocking round-trip.
//!
//! ## Error behaviour
//!
//! * [`search_by_tag`](BookmarkClient::search_by_tag) reports any failure as
//!   [`Error::Search`], with the transport or parse error as its source.
//! * The count operations keep [`Error::Transport`] and [`Error::Parse`]
//!   apart so callers can tell "unreachable" from "unexpected answer".

use std::collections::HashMap;

use crate::config::ClientConfig;
use crate::endpoint;
use crate::entry::BookmarkEntry;
use crate::error::{Error, Result};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::parse;

/// Minimum bookmark count used by [`BookmarkClient::search_by_tag`].
pub const DEFAULT_MIN_USERS: u32 = 3;

/// Filters for a tag search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Only return entries bookmarked by at least this many users.
    pub min_users: u32,
    /// Ask the service to hide adult content.
    pub safe_search: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_users: DEFAULT_MIN_USERS,
            safe_search: true,
        }
    }
}

/// Client for the Hatena Bookmark API.
///
/// Configuration is fixed at construction, so a shared reference can be used
/// from several threads when the fetcher allows it ([`HttpFetcher`] does).
#[derive(Debug, Clone)]
pub struct BookmarkClient<F = HttpFetcher> {
    fetcher: F,
}

impl BookmarkClient<HttpFetcher> {
    /// Client with direct connections.
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Client using the settings in `config`.
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_fetcher(HttpFetcher::new(config)?))
    }
}

impl<F: Fetcher> BookmarkClient<F> {
    /// Client that performs its requests through `fetcher`.
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Entries tagged `query`, using [`SearchOptions::default`].
    pub fn search_by_tag(&self, query: &str) -> Result<Vec<BookmarkEntry>> {
        self.search_by_tag_with(query, &SearchOptions::default())
    }

    /// Entries tagged `query` that match `options`, in feed order.
    pub fn search_by_tag_with(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<BookmarkEntry>> {
        let url = endpoint::build_tag_search_url(query, options.min_users, options.safe_search);
        self.fetcher
            .fetch(&url)
            .and_then(|body| parse::parse_feed(&body))
            .map_err(|source| Error::Search {
                query: query.to_string(),
                source: Box::new(source),
            })
    }

    /// Number of users who bookmarked `url`.  Unknown URLs count as `0`.
    pub fn get_count(&self, url: &str) -> Result<u64> {
        let body = self.fetcher.fetch(&endpoint::build_count_url(url))?;
        parse::parse_count(&body)
    }

    /// Bookmark counts for several URLs in one request.
    ///
    /// The map holds whatever the service returned; URLs it has no data for
    /// may be missing.
    pub fn get_counts<S: AsRef<str>>(&self, urls: &[S]) -> Result<HashMap<String, u64>> {
        let body = self.fetcher.fetch(&endpoint::build_counts_url(urls))?;
        parse::parse_counts(&body)
    }

    /// Whether `url` has at least zero bookmarks, i.e. whether the count
    /// could be fetched and parsed at all.
    pub fn has_count(&self, url: &str) -> Result<bool> {
        self.has_count_at_least(url, 0)
    }

    /// Whether `url` has been bookmarked at least `threshold` times.
    pub fn has_count_at_least(&self, url: &str, threshold: u64) -> Result<bool> {
        Ok(self.get_count(url)? >= threshold)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
