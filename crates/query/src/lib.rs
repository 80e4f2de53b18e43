//! Query-string parameter lookup.
//!
//! Parameters are taken verbatim from the URI: no percent-decoding, no
//! `+`-as-space, and any `?` after the first one is ordinary data.
//!
//! # Example
//!
//! ```
//! use shortlink_query::extract;
//!
//! let uri = "https://h/p?name=ferret&color=purple";
//! assert_eq!(extract(uri, "color").as_deref(), Some("purple"));
//! assert_eq!(extract("https://h/p", "s"), None);
//! ```

mod pairs;

pub use pairs::{query_pairs, QueryPairs};

/// Returns the value of the first `key` parameter in `uri`.
pub fn extract(uri: &str, key: &str) -> Option<String> {
    query_pairs(uri)
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value.to_owned())
}

/// Like [`extract`], but borrows the value from `uri`.
pub fn extract_str<'a>(uri: &'a str, key: &str) -> Option<&'a str> {
    query_pairs(uri)
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
}
