//! Bookmark count parsing.
//!
//! `entry.count` answers with a bare integer (or nothing at all for unknown
//! URLs); `entry.counts` answers with a flat JSON object keyed by URL.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// Cause attached to [`Error::Parse`] when a JSON value is not a count.
#[derive(Debug, thiserror::Error)]
#[error("expected a non-negative number, found {0}")]
struct NotACount(String);

/// Parse the plain-text body of the single count endpoint.
///
/// Surrounding whitespace is ignored and an empty body means `0`.
pub fn parse_count(body: &str) -> Result<u64> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .map_err(|e| Error::parse(format!("invalid bookmark count {trimmed:?}"), e))
}

/// Parse the JSON body of the batch count endpoint.
///
/// Fractional values are truncated.  URLs the service left out of the
/// response are simply absent from the map.  Errors quote the raw body.
pub fn parse_counts(json: &str) -> Result<HashMap<String, u64>> {
    let object: Map<String, Value> = serde_json::from_str(json)
        .map_err(|e| Error::parse(format!("failed to decode bookmark counts: {json}"), e))?;

    let counts = object
        .into_iter()
        .map(|(url, value)| match count_from_value(&value) {
            Some(count) => Ok((url, count)),
            None => Err(Error::parse(
                format!("invalid bookmark count for {url}: {json}"),
                NotACount(value.to_string()),
            )),
        })
        .collect::<Result<HashMap<_, _>>>()?;

    debug!(urls = counts.len(), "parsed bookmark counts");
    Ok(counts)
}

fn count_from_value(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .map(f64::trunc)
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f as u64)
    })
}
