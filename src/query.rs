//! Query-to-URL construction and dispatch.
//!
//! The whole of Searchpad's non-presentational logic lives here: turn
//! the raw contents of the search box into a Google search URL and hand
//! it to the OS default-browser launcher.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Base endpoint all search URLs are built on.
pub const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// Query string suffix selecting the first-result redirect.
const LUCKY_SUFFIX: &str = "&btnI";

/// Characters to percent-encode in the `q=` query component.
///
/// Covers the standard query set plus the delimiters that would change
/// the meaning of the component itself (`&`, `=`, `+`, `?`) and `%` so
/// the encoding stays reversible.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?')
    .add(b'/');

/// Which of the two activation controls fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Regular results listing.
    Standard,
    /// "Feeling Lucky": redirect straight to the top result.
    Lucky,
}

impl SearchMode {
    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Standard => "Search",
            SearchMode::Lucky => "Feeling Lucky",
        }
    }
}

/// Percent-encode a raw query for use as a URL query component.
pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, QUERY_ENCODE_SET).to_string()
}

/// Build the standard results-listing URL for `query`.
pub fn build_search_url(query: &str) -> String {
    format!("{}?q={}", SEARCH_ENDPOINT, encode_query(query))
}

/// Build the first-result redirect URL for `query`.
pub fn build_lucky_url(query: &str) -> String {
    format!("{}{}", build_search_url(query), LUCKY_SUFFIX)
}

/// Build the URL for `query` in the given mode.
pub fn build_url(query: &str, mode: SearchMode) -> String {
    match mode {
        SearchMode::Standard => build_search_url(query),
        SearchMode::Lucky => build_lucky_url(query),
    }
}

/// Dispatch `query` through an injected launcher.
///
/// An empty query is a silent no-op: `launch` is never invoked and
/// `None` is returned. Otherwise the built URL is passed to `launch`
/// exactly once and returned. The query is taken verbatim; whitespace
/// is not trimmed.
pub fn dispatch_via<F>(query: &str, mode: SearchMode, mut launch: F) -> Option<String>
where
    F: FnMut(&str),
{
    if query.is_empty() {
        return None;
    }

    let url = build_url(query, mode);
    launch(&url);
    Some(url)
}

/// Dispatch `query` to the user's default browser.
///
/// Fire-and-forget: the launch result is not inspected. Returns the
/// dispatched URL, or `None` for an empty query.
pub fn dispatch(query: &str, mode: SearchMode) -> Option<String> {
    dispatch_via(query, mode, |url| {
        tracing::debug!(url, "opening default browser");
        let _ = open::that(url);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_plain_query() {
        assert_eq!(
            build_search_url("cats"),
            "https://www.google.com/search?q=cats"
        );
    }

    #[test]
    fn lucky_url_plain_query() {
        assert_eq!(
            build_lucky_url("cats"),
            "https://www.google.com/search?q=cats&btnI"
        );
    }

    #[test]
    fn lucky_url_is_search_url_plus_suffix() {
        for q in ["cats", "hello world", "a&b", "日本語", ""] {
            assert_eq!(build_lucky_url(q), build_search_url(q) + "&btnI");
        }
    }

    #[test]
    fn plain_ascii_passes_through_unencoded() {
        assert_eq!(encode_query("rust-egui_tutorial.2024"), "rust-egui_tutorial.2024");
    }

    #[test]
    fn spaces_are_percent_encoded() {
        let url = build_search_url("hello world");
        assert!(!url.contains(' '));
        assert_eq!(url, "https://www.google.com/search?q=hello%20world");
    }

    #[test]
    fn reserved_chars_are_percent_encoded() {
        assert_eq!(encode_query("a&b"), "a%26b");
        assert_eq!(encode_query("c#"), "c%23");
        assert_eq!(encode_query("1+1=2"), "1%2B1%3D2");
        assert_eq!(encode_query("what?"), "what%3F");
        assert_eq!(encode_query("50%"), "50%25");
        assert_eq!(encode_query("tcp/ip"), "tcp%2Fip");
    }

    #[test]
    fn non_ascii_is_utf8_percent_encoded() {
        let encoded = encode_query("日本語");
        assert!(encoded.starts_with('%'));
        assert!(encoded.chars().all(|c| c.is_ascii()));
    }

    #[test]
    fn built_urls_parse_as_absolute_urls() {
        for q in ["cats", "hello world", "a&b=c#d", "100% free?", "日本語", "  "] {
            for mode in [SearchMode::Standard, SearchMode::Lucky] {
                let built = build_url(q, mode);
                let parsed = url::Url::parse(&built).expect("built URL must parse");
                assert_eq!(parsed.scheme(), "https");
                assert_eq!(parsed.host_str(), Some("www.google.com"));
            }
        }
    }

    #[test]
    fn empty_query_never_invokes_launcher() {
        for mode in [SearchMode::Standard, SearchMode::Lucky] {
            let mut calls = 0;
            let dispatched = dispatch_via("", mode, |_| calls += 1);
            assert_eq!(calls, 0);
            assert_eq!(dispatched, None);
        }
    }

    #[test]
    fn non_empty_query_invokes_launcher_once() {
        let mut seen = Vec::new();
        let dispatched = dispatch_via("cats", SearchMode::Standard, |url| {
            seen.push(url.to_string());
        });
        assert_eq!(seen, vec!["https://www.google.com/search?q=cats".to_string()]);
        assert_eq!(dispatched.as_deref(), Some("https://www.google.com/search?q=cats"));
    }

    #[test]
    fn lucky_dispatch_uses_lucky_url() {
        let dispatched = dispatch_via("cats", SearchMode::Lucky, |_| {});
        assert_eq!(
            dispatched.as_deref(),
            Some("https://www.google.com/search?q=cats&btnI")
        );
    }

    #[test]
    fn whitespace_only_query_is_not_empty() {
        // The query is verbatim: only a truly empty box suppresses dispatch.
        let mut calls = 0;
        let dispatched = dispatch_via("  ", SearchMode::Standard, |_| calls += 1);
        assert_eq!(calls, 1);
        assert_eq!(
            dispatched.as_deref(),
            Some("https://www.google.com/search?q=%20%20")
        );
    }

    #[test]
    fn mode_labels() {
        assert_eq!(SearchMode::Standard.label(), "Search");
        assert_eq!(SearchMode::Lucky.label(), "Feeling Lucky");
    }
}
