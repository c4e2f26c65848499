//
//  freshdesk-cli
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! List query parameters and page-number pagination
//!
//! Freshdesk list endpoints are paged with a 1-indexed `page` query
//! parameter and carry no total count or next link. The only way to know a
//! listing is exhausted is to receive an empty page.
//!
//! # Example
//!
//! ```rust
//! use freshdesk_cli::api::common::ListParams;
//!
//! let params = ListParams::new()
//!     .with("state", "all")
//!     .with("query", "email is jane@example.com");
//!
//! assert_eq!(params.start_page(), 1);
//! assert_eq!(params.with_page(2).get("page"), Some("2"));
//! ```

/// Name of the query parameter carrying the page number.
pub const PAGE_PARAM: &str = "page";

/// Ordered query parameters for a list request.
///
/// Setting a key that is already present replaces its value in place, so the
/// order of the query string stays stable across pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    pairs: Vec<(String, String)>,
}

impl ListParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Returns the value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All pairs in insertion order, ready for `RequestBuilder::query`.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The page a fetch-all loop starts from: the caller's `page`, or 1.
    pub fn start_page(&self) -> u32 {
        self.get(PAGE_PARAM)
            .and_then(|p| p.parse().ok())
            .unwrap_or(1)
    }

    /// A copy of these parameters requesting `page`.
    pub fn with_page(&self, page: u32) -> Self {
        self.clone().with(PAGE_PARAM, page.to_string())
    }
}

impl<K, V> FromIterator<(K, V)> for ListParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}
