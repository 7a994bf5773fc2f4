//! Client configuration.
//!
//! A [`ClientConfig`] is handed to the client once, at construction, and never
//! changes afterwards.  It derives [`Deserialize`] so an application can embed
//! it in its own config file.
//!
//! ## Proxy port 0
//!
//! [`ProxyConfig::new`] accepts port `0`, but [`ClientConfig::active_proxy`]
//! only reports a proxy whose port is non-zero.  A proxy on port 0 therefore
//! passes validation and is then ignored by the fetcher.

use serde::Deserialize;

use crate::error::{Error, Result};

/// An HTTP proxy that every request is routed through.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProxyConfig {
    host: String,
    port: u16,
}

impl ProxyConfig {
    /// Create a proxy target.
    ///
    /// Fails with [`Error::InvalidArgument`] if `host` is empty.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self> {
        let proxy = Self {
            host: host.into(),
            port,
        };
        proxy.validate()?;
        Ok(proxy)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Whether the fetcher should actually route through this proxy.
    pub fn is_active(&self) -> bool {
        !self.host.is_empty() && self.port > 0
    }

    /// Proxy URL in the form reqwest expects.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(Error::InvalidArgument("proxy host is empty".into()));
        }
        Ok(())
    }
}

/// Settings for a [`BookmarkClient`](crate::BookmarkClient).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Optional HTTP proxy.  `None` means direct connections.
    #[serde(default)]
    pub proxy: Option<ProxyConfig>,
}

impl ClientConfig {
    /// Return this config with a proxy set.
    pub fn with_proxy(mut self, host: impl Into<String>, port: u16) -> Result<Self> {
        self.proxy = Some(ProxyConfig::new(host, port)?);
        Ok(self)
    }

    /// The proxy requests will go through, if any.
    pub fn active_proxy(&self) -> Option<&ProxyConfig> {
        self.proxy.as_ref().filter(|proxy| proxy.is_active())
    }

    /// Re-check invariants; needed for values built by deserialization.
    pub fn validate(&self) -> Result<()> {
        match &self.proxy {
            Some(proxy) => proxy.validate(),
            None => Ok(()),
        }
    }
}
