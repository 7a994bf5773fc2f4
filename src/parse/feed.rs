//! Tag search feed parsing.
//!
//! The search endpoint serves RSS 1.0 (`rdf:RDF` with `<item>` elements
//! directly under the root) using the Dublin Core, `content` and `hatena`
//! namespaces.  The [`rss`] crate reads the document; this module then pulls
//! the fields a [`BookmarkEntry`] needs out of each item.
//!
//! | element                | field            |
//! |------------------------|------------------|
//! | `title`                | `title`          |
//! | `link`                 | `link`           |
//! | `description`          | `description`    |
//! | `content:encoded`      | `content`        |
//! | `dc:date`              | `published_at`   |
//! | `hatena:bookmarkcount` | `bookmark_count` |
//!
//! Anything else in an item is ignored.  A single malformed item fails the
//! whole feed; there are no partial results.

use chrono::{DateTime, NaiveDateTime, Utc};
use rss::extension::ExtensionMap;
use rss::{Channel, Item};
use tracing::debug;

use crate::entry::BookmarkEntry;
use crate::error::{Error, Result};

/// Format of `dc:date` values.  The trailing `Z` marks UTC.
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a tag search feed into entries, in document order.
pub fn parse_feed(xml: &str) -> Result<Vec<BookmarkEntry>> {
    let channel = Channel::read_from(xml.as_bytes())
        .map_err(|e| Error::parse(format!("failed to read bookmark feed: {e}"), e))?;

    let entries = channel
        .items()
        .iter()
        .map(entry_from_item)
        .collect::<Result<Vec<_>>>()?;

    debug!(entries = entries.len(), "parsed bookmark feed");
    Ok(entries)
}

fn entry_from_item(item: &Item) -> Result<BookmarkEntry> {
    let extensions = item.extensions();

    let published_at = dc_date(item).map(parse_date).transpose()?;
    let bookmark_count =
        parse_bookmark_count(extension_value(extensions, "hatena", "bookmarkcount"))?;

    // rss maps `content:encoded` itself; the extension lookup covers feeds
    // where it ends up in the generic map instead.
    let content = item
        .content()
        .or_else(|| extension_value(extensions, "content", "encoded"))
        .unwrap_or_default();

    Ok(BookmarkEntry {
        title: item.title().unwrap_or_default().to_string(),
        link: item.link().unwrap_or_default().to_string(),
        description: item.description().unwrap_or_default().to_string(),
        content: content.to_string(),
        published_at,
        bookmark_count,
    })
}

/// First value of `<prefix:name>` among an item's extension elements.
fn extension_value<'a>(
    extensions: &'a ExtensionMap,
    prefix: &str,
    name: &str,
) -> Option<&'a str> {
    extensions.get(prefix)?.get(name)?.first()?.value()
}

/// `dc:date` lands in the Dublin Core extension when the namespace is
/// declared on the root, and in the generic extension map otherwise.
fn dc_date(item: &Item) -> Option<&str> {
    item.dublin_core_ext()
        .and_then(|dc| dc.dates().first())
        .map(String::as_str)
        .or_else(|| extension_value(item.extensions(), "dc", "date"))
}

fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| Error::parse(format!("invalid dc:date {value:?}: {e}"), e))
}

fn parse_bookmark_count(value: Option<&str>) -> Result<u64> {
    match value {
        None | Some("") => Ok(0),
        Some(text) => text
            .parse()
            .map_err(|e| Error::parse(format!("invalid hatena:bookmarkcount {text:?}: {e}"), e)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
