//! Request URL construction for the three API endpoints.
//!
//! Values are encoded with `application/x-www-form-urlencoded` rules (UTF-8,
//! space as `+`), which is what the Hatena endpoints expect.

use url::form_urlencoded;

/// Tag search feed.
pub const TAG_SEARCH_ENDPOINT: &str = "http://b.hatena.ne.jp/search/tag";
/// Bookmark count for a single URL, returned as plain text.
pub const ENTRY_COUNT_ENDPOINT: &str = "http://api.b.st-hatena.com/entry.count";
/// Bookmark counts for several URLs, returned as a JSON object.
pub const ENTRY_COUNTS_ENDPOINT: &str = "http://api.b.st-hatena.com/entry.counts";

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// URL of the RSS feed listing entries tagged `query`.
pub fn build_tag_search_url(query: &str, min_users: u32, safe_search: bool) -> String {
    let safe = if safe_search { "on" } else { "off" };
    format!(
        "{TAG_SEARCH_ENDPOINT}?safe={safe}&q={}&users={min_users}&mode=rss",
        encode(query)
    )
}

/// URL returning the bookmark count of `target_url`.
pub fn build_count_url(target_url: &str) -> String {
    format!("{ENTRY_COUNT_ENDPOINT}?url={}", encode(target_url))
}

/// URL returning bookmark counts for every URL in `target_urls`, in order.
///
/// An empty slice yields the bare endpoint with no query string.
pub fn build_counts_url<S: AsRef<str>>(target_urls: &[S]) -> String {
    let mut url = String::from(ENTRY_COUNTS_ENDPOINT);
    for (i, target) in target_urls.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str("url=");
        url.push_str(&encode(target.as_ref()));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Decode the query string of `url` into (key, value) pairs.
    fn query_pairs(url: &str) -> Vec<(String, String)> {
        let (_, query) = url.split_once('?').unwrap();
        form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn param(url: &str, key: &str) -> String {
        query_pairs(url)
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .unwrap()
    }

    // -- tag search ----------------------------------------------------------

    #[test]
    fn tag_search_url_matches_template() {
        let url = build_tag_search_url("rust", 3, true);
        assert_eq!(
            url,
            "http://b.hatena.ne.jp/search/tag?safe=on&q=rust&users=3&mode=rss"
        );
    }

    #[test]
    fn tag_search_renders_safe_search_off() {
        let url = build_tag_search_url("rust", 0, false);
        assert_eq!(param(&url, "safe"), "off");
        assert_eq!(param(&url, "users"), "0");
    }

    #[test]
    fn tag_search_query_decodes_back() {
        for query in ["はてな", "a b&c=d", "c++", "", "100%"] {
            for users in [0, 3, 1000, u32::MAX] {
                let url = build_tag_search_url(query, users, true);
                assert_eq!(param(&url, "q"), query);
                assert_eq!(param(&url, "users"), users.to_string());
                assert_eq!(param(&url, "mode"), "rss");
            }
        }
    }

    #[test]
    fn tag_search_encodes_space_as_plus() {
        let url = build_tag_search_url("a b", 3, true);
        assert!(url.contains("q=a+b&"));
    }

    // -- single count --------------------------------------------------------

    #[test]
    fn count_url_encodes_target() {
        assert_eq!(
            build_count_url("http://example.com/?a=1&b=2"),
            "http://api.b.st-hatena.com/entry.count?url=http%3A%2F%2Fexample.com%2F%3Fa%3D1%26b%3D2"
        );
    }

    // -- batch counts --------------------------------------------------------

    #[test]
    fn counts_url_without_targets_is_bare_endpoint() {
        let empty: [&str; 0] = [];
        let url = build_counts_url(&empty);
        assert_eq!(url, ENTRY_COUNTS_ENDPOINT);
        assert!(!url.contains('?'));
    }

    #[test]
    fn counts_url_joins_targets_in_order() {
        assert_eq!(
            build_counts_url(&["a", "b"]),
            "http://api.b.st-hatena.com/entry.counts?url=a&url=b"
        );

        let url = build_counts_url(&["http://b.example/", "http://a.example/"]);
        assert_eq!(
            url,
            "http://api.b.st-hatena.com/entry.counts?url=http%3A%2F%2Fb.example%2F&url=http%3A%2F%2Fa.example%2F"
        );
        let values: Vec<String> = query_pairs(&url).into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, ["http://b.example/", "http://a.example/"]);
    }

    #[test]
    fn counts_url_accepts_owned_strings() {
        let targets = vec![String::from("x y")];
        assert!(build_counts_url(&targets).ends_with("?url=x+y"));
    }
}
