//! Keyword entries and the seed table

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prepended to stored URLs that don't already start with `http`.
pub const DEFAULT_SCHEME: &str = "http://";

/// Keyword → entry. Iteration is bytewise-lexicographic by keyword, which is
/// the order prefix fallback and suggestions scan in.
pub type Mappings = BTreeMap<String, Entry>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub url: String,
    pub count: u32,
}

impl Entry {
    /// A fresh entry: normalized URL, count 1.
    pub fn new(url: &str) -> Self {
        Self {
            url: normalize_url(url),
            count: 1,
        }
    }

    /// Owned copy with the usage count bumped by one.
    pub fn bumped(&self) -> Self {
        Self {
            url: self.url.clone(),
            count: self.count.saturating_add(1),
        }
    }
}

/// Make a URL absolute by prepending [`DEFAULT_SCHEME`] unless the literal
/// already starts with `http`. Deliberately a plain prefix test: `https://x`
/// and `httpfoo` are both left alone.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{url}")
    }
}

const SEEDS: &[(&str, &str)] = &[
    ("newdoc", "https://docs.google.com/document/create"),
    ("newsheet", "https://docs.google.com/spreadsheet/ccc?new"),
    ("newslides", "https://docs.google.com/presentation/create"),
    ("mail", "https://mail.google.com/mail/u/0/"),
];

/// The table an empty store is seeded with.
pub fn default_mappings() -> Mappings {
    SEEDS
        .iter()
        .map(|(keyword, url)| (keyword.to_string(), Entry::new(url)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("en.wikipedia.org"), "http://en.wikipedia.org");
        assert_eq!(normalize_url("b"), "http://b");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        // Prefix test only, matching the stored-form contract
        assert_eq!(normalize_url("httpbin.org"), "httpbin.org");
        assert_eq!(normalize_url("ftp://host"), "http://ftp://host");
    }

    #[test]
    fn test_new_entry_starts_at_one() {
        let entry = Entry::new("example.com");
        assert_eq!(entry.url, "http://example.com");
        assert_eq!(entry.count, 1);
    }

    #[test]
    fn test_bumped_is_a_copy() {
        let entry = Entry::new("https://example.com");
        let bumped = entry.bumped();
        assert_eq!(entry.count, 1);
        assert_eq!(bumped.count, 2);
        assert_eq!(bumped.url, entry.url);

        let saturated = Entry {
            url: entry.url.clone(),
            count: u32::MAX,
        };
        assert_eq!(saturated.bumped().count, u32::MAX);
    }

    #[test]
    fn test_default_mappings() {
        let seeds = default_mappings();
        assert_eq!(seeds.len(), 4);
        assert!(seeds.values().all(|e| e.count == 1));
        assert_eq!(
            seeds["newdoc"].url,
            "https://docs.google.com/document/create"
        );
        assert_eq!(seeds["mail"].url, "https://mail.google.com/mail/u/0/");

        let keys: Vec<&str> = seeds.keys().map(String::as_str).collect();
        assert_eq!(keys, ["mail", "newdoc", "newsheet", "newslides"]);
    }

    #[test]
    fn test_entry_serde_shape() {
        let json = serde_json::to_value(Entry::new("https://a.example")).unwrap();
        assert_eq!(json, serde_json::json!({ "url": "https://a.example", "count": 1 }));
    }
}
