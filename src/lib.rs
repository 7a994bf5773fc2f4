//! hatena-bookmark — a blocking client for the Hatena Bookmark public API.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌─────────────┐  URL   ┌──────────┐  body  ┌──────────┐
//! │ endpoint.rs │ ─────► │ fetch.rs │ ─────► │  parse/  │
//! │ (builders)  │        │ (HTTP)   │        │(RSS/JSON)│
//! └─────────────┘        └──────────┘        └──────────┘
//!        ▲                                         │
//!        │              ┌───────────┐              │
//!        └───────────── │ client.rs │ ◄────────────┘
//!                       │ (façade)  │  entries / counts
//!                       └───────────┘
//! ```
//!
//! * **`client`** — [`BookmarkClient`], the public entry point.
//! * **`endpoint`** — fixed endpoint URLs and their query-string builders.
//! * **`fetch`** — the [`Fetcher`] trait and the reqwest-backed [`HttpFetcher`].
//! * **`parse`** — the feed, single count and batch count parsers.
//! * **`entry`** — [`BookmarkEntry`], one search result.
//! * **`config`** — [`ClientConfig`], fixed when the client is built.
//! * **`error`** — [`Error`] and the crate-wide [`Result`].
//!
//! ## Example
//!
//! ```no_run
//! use hatena_bookmark::{BookmarkClient, ClientConfig};
//!
//! # fn main() -> hatena_bookmark::Result<()> {
//! let config = ClientConfig::default().with_proxy("proxy.example", 8080)?;
//! let client = BookmarkClient::with_config(&config)?;
//!
//! for entry in client.search_by_tag("rust")? {
//!     println!("{:>5}  {}", entry.bookmark_count(), entry.title());
//! }
//!
//! let count = client.get_count("https://www.rust-lang.org/")?;
//! println!("rust-lang.org: {count}");
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
pub mod endpoint;
mod entry;
mod error;
mod fetch;
pub mod parse;

pub use client::{BookmarkClient, SearchOptions, DEFAULT_MIN_USERS};
pub use config::{ClientConfig, ProxyConfig};
pub use entry::BookmarkEntry;
pub use error::{BoxError, Error, Result};
pub use fetch::{Fetcher, HttpFetcher};
