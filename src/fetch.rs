//! HTTP transport.
//!
//! The client talks to the network only through the [`Fetcher`] trait, so the
//! whole request/parse pipeline can be driven from canned bodies in tests.
//! [`HttpFetcher`] is the real implementation, built on
//! `reqwest::blocking`.
//!
//! ## Body handling
//!
//! Bodies are decoded as UTF-8 (invalid sequences are replaced) and every
//! line break is removed, so lines are concatenated directly.  None of the
//! endpoint payloads depend on newlines.
//!
//! ## Timeouts
//!
//! No request timeout is configured.  A connection that never answers blocks
//! the caller indefinitely.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Proxy;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Something that can GET a URL and return its body as text.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Closures work as fetchers, which keeps test doubles short.
impl<F> Fetcher for F
where
    F: Fn(&str) -> Result<String>,
{
    fn fetch(&self, url: &str) -> Result<String> {
        self(url)
    }
}

/// [`Fetcher`] that performs real HTTP GET requests.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    proxied: bool,
}

impl HttpFetcher {
    /// Build a fetcher for `config`.
    ///
    /// Requests go through the configured proxy only when it is active (see
    /// [`ClientConfig::active_proxy`]).
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder().timeout(None::<Duration>);
        let active = config.active_proxy();
        if let Some(target) = active {
            let proxy = Proxy::all(target.url())
                .map_err(|e| Error::InvalidArgument(format!("proxy {}: {e}", target.url())))?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(Error::Client)?;
        Ok(Self {
            client,
            proxied: active.is_some(),
        })
    }

    /// Whether requests are routed through a proxy.
    pub fn is_proxied(&self) -> bool {
        self.proxied
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, proxied = self.proxied, "GET request");

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                warn!(url, error = %e, "request failed");
                Error::transport(url, e)
            })?;

        let body = response.bytes().map_err(|e| {
            warn!(url, error = %e, "failed to read response body");
            Error::transport(url, e)
        })?;

        Ok(join_lines(&String::from_utf8_lossy(&body)))
    }
}

/// Concatenate the lines of `text`, dropping `\n` and `\r`.
fn join_lines(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
