//! Response body parsers.
//!
//! Each endpoint answers in a different format, so each gets its own parser:
//!
//! * [`feed`] — the RSS document returned by the tag search.
//! * [`counts`] — the plain-text single count and the JSON batch counts.
//!
//! All parsers are pure functions over an already-fetched body, so they can be
//! tested without touching the network.  Every failure comes back as
//! [`Error::Parse`](crate::Error::Parse) with the underlying cause attached.

pub mod counts;
pub mod feed;

pub use counts::{parse_count, parse_counts};
pub use feed::parse_feed;
