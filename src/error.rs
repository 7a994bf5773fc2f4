//! Error types for the bookmark client.
//!
//! Failures fall into three kinds: bad arguments (rejected before any I/O),
//! transport problems (connect, read, HTTP status) and parse problems
//! (feed XML, dates, counts).  [`BookmarkClient::search_by_tag`] folds the
//! last two into [`Error::Search`]; the count operations keep them apart.
//!
//! [`BookmarkClient::search_by_tag`]: crate::BookmarkClient::search_by_tag

use thiserror::Error;

/// Boxed underlying cause carried by [`Error::Transport`] and [`Error::Parse`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by the bookmark client.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input was empty or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent, returned a non-success status, or the
    /// body could not be read.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// A response body could not be interpreted.
    #[error("{message}")]
    Parse {
        message: String,
        #[source]
        source: BoxError,
    },

    /// A tag search failed, either in transport or while parsing the feed.
    #[error("tag search for {query:?} failed: {source}")]
    Search {
        query: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    pub(crate) fn parse(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Parse {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Whether this error came from the network layer.
    ///
    /// Looks through [`Error::Search`] to the failure it wraps.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::Search { source, .. } => source.is_transport(),
            _ => false,
        }
    }

    /// Whether this error came from interpreting a response body.
    pub fn is_parse(&self) -> bool {
        match self {
            Self::Parse { .. } => true,
            Self::Search { source, .. } => source.is_parse(),
            _ => false,
        }
    }
}
