//
//  freshdesk-cli
//  api/endpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Endpoint Construction
//!
//! Every Freshdesk endpoint has the shape `<prefix>/<resource_name>[/<id>].json`.
//! A resource is described by a [`ResourceDescriptor`]: its path segment, the
//! envelope key its JSON is wrapped under, and a path template for the prefix.
//! Nested solution resources differ from top-level ones only in the number of
//! `{}` placeholders their template carries.
//!
//! ## Example
//!
//! ```rust
//! use freshdesk_cli::api::endpoint::{endpoint, ResourceId, SOLUTION_FOLDERS};
//!
//! assert_eq!(endpoint("contacts", None, None), "/contacts.json");
//! assert_eq!(endpoint("contacts", Some(&ResourceId::from(5u64)), None), "/contacts/5.json");
//!
//! let prefix = SOLUTION_FOLDERS.prefix(&[ResourceId::from(3u64)]).unwrap();
//! assert_eq!(
//!     endpoint(SOLUTION_FOLDERS.resource_name, None, Some(&prefix)),
//!     "/solution/categories/3/folders.json"
//! );
//! ```

use std::fmt;

use crate::api::common::ApiError;

/// Placeholder for a parent id inside a path template.
const PLACEHOLDER: &str = "{}";

/// Identifier of a single resource.
///
/// Freshdesk ids are numeric, but the API accepts any path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        match id.parse::<u64>() {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Text(id.to_string()),
        }
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self::from(id.as_str())
    }
}

/// Static description of one Freshdesk resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// URL path segment, e.g. `contacts`
    pub resource_name: &'static str,
    /// JSON wrapping key, e.g. `user`
    pub envelope_key: &'static str,
    /// Prefix template; `{}` marks a parent id, empty for top-level resources
    pub path_template: &'static str,
}

/// `/contacts.json`, wrapped as `user`.
pub const CONTACTS: ResourceDescriptor = ResourceDescriptor {
    resource_name: "contacts",
    envelope_key: "user",
    path_template: "",
};

/// `/customers.json`, wrapped as `customer`.
pub const CUSTOMERS: ResourceDescriptor = ResourceDescriptor {
    resource_name: "customers",
    envelope_key: "customer",
    path_template: "",
};

/// `/helpdesk/tickets.json`, wrapped as `helpdesk_ticket`.
pub const TICKETS: ResourceDescriptor = ResourceDescriptor {
    resource_name: "tickets",
    envelope_key: "helpdesk_ticket",
    path_template: "helpdesk",
};

/// `/solution/categories.json`, wrapped as `solution_category`.
pub const SOLUTION_CATEGORIES: ResourceDescriptor = ResourceDescriptor {
    resource_name: "categories",
    envelope_key: "solution_category",
    path_template: "solution",
};

/// `/solution/categories/{category}/folders.json`, wrapped as `solution_folder`.
pub const SOLUTION_FOLDERS: ResourceDescriptor = ResourceDescriptor {
    resource_name: "folders",
    envelope_key: "solution_folder",
    path_template: "solution/categories/{}",
};

/// `/solution/categories/{category}/folders/{folder}/articles.json`, wrapped as `solution_article`.
pub const SOLUTION_ARTICLES: ResourceDescriptor = ResourceDescriptor {
    resource_name: "articles",
    envelope_key: "solution_article",
    path_template: "solution/categories/{}/folders/{}",
};

impl ResourceDescriptor {
    /// Number of parent ids the path template needs.
    pub fn arity(&self) -> usize {
        self.path_template.matches(PLACEHOLDER).count()
    }

    /// Fills the template's placeholders in order with `parents`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PathArity`] if `parents.len()` differs from
    /// [`arity`](Self::arity).
    pub fn prefix(&self, parents: &[ResourceId]) -> Result<String, ApiError> {
        let expected = self.arity();
        if parents.len() != expected {
            return Err(ApiError::PathArity {
                expected,
                got: parents.len(),
            });
        }

        let mut segments = self.path_template.split(PLACEHOLDER);
        let mut prefix = segments.next().unwrap_or_default().to_string();
        for (parent, rest) in parents.iter().zip(segments) {
            prefix.push_str(&parent.to_string());
            prefix.push_str(rest);
        }
        Ok(prefix)
    }
}

/// Builds `/<prefix>/<resource_name>[/<id>].json`.
///
/// Slashes around `prefix` are normalised, so `solution`, `/solution` and
/// `solution/` give the same path.
pub fn endpoint(resource_name: &str, id: Option<&ResourceId>, prefix: Option<&str>) -> String {
    let mut path = String::new();

    if let Some(prefix) = prefix.map(|p| p.trim_matches('/')).filter(|p| !p.is_empty()) {
        path.push('/');
        path.push_str(prefix);
    }

    path.push('/');
    path.push_str(resource_name);

    if let Some(id) = id {
        path.push('/');
        path.push_str(&id.to_string());
    }

    path.push_str(".json");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_and_item_paths() {
        assert_eq!(endpoint("contacts", None, None), "/contacts.json");
        assert_eq!(
            endpoint("contacts", Some(&ResourceId::from(5u64)), None),
            "/contacts/5.json"
        );
        assert_eq!(
            endpoint("contacts", Some(&ResourceId::from("abc")), None),
            "/contacts/abc.json"
        );
    }

    #[test]
    fn test_prefix_normalisation() {
        for prefix in ["solution/categories/3", "/solution/categories/3/", ""] {
            let path = endpoint("folders", None, Some(prefix));
            assert!(path.starts_with('/') && !path.starts_with("//"), "{}", path);
        }
        assert_eq!(
            endpoint("folders", None, Some("/solution/categories/3/")),
            "/solution/categories/3/folders.json"
        );
        assert_eq!(endpoint("contacts", None, Some("")), "/contacts.json");
    }

    #[test]
    fn test_descriptor_arity() {
        assert_eq!(CONTACTS.arity(), 0);
        assert_eq!(TICKETS.arity(), 0);
        assert_eq!(SOLUTION_CATEGORIES.arity(), 0);
        assert_eq!(SOLUTION_FOLDERS.arity(), 1);
        assert_eq!(SOLUTION_ARTICLES.arity(), 2);
    }

    #[test]
    fn test_nested_prefixes() {
        let folders = SOLUTION_FOLDERS.prefix(&[3u64.into()]).unwrap();
        assert_eq!(
            endpoint(SOLUTION_FOLDERS.resource_name, None, Some(&folders)),
            "/solution/categories/3/folders.json"
        );

        let articles = SOLUTION_ARTICLES.prefix(&[3u64.into(), 9u64.into()]).unwrap();
        assert_eq!(
            endpoint(SOLUTION_ARTICLES.resource_name, Some(&12u64.into()), Some(&articles)),
            "/solution/categories/3/folders/9/articles/12.json"
        );

        let tickets = TICKETS.prefix(&[]).unwrap();
        assert_eq!(
            endpoint(TICKETS.resource_name, Some(&1u64.into()), Some(&tickets)),
            "/helpdesk/tickets/1.json"
        );
    }

    #[test]
    fn test_prefix_arity_mismatch() {
        let err = SOLUTION_ARTICLES.prefix(&[3u64.into()]).unwrap_err();
        assert!(matches!(err, ApiError::PathArity { expected: 2, got: 1 }));
    }

    #[test]
    fn test_resource_id_from_str() {
        assert_eq!(ResourceId::from("42"), ResourceId::Numeric(42));
        assert_eq!(
            ResourceId::from("slug".to_string()),
            ResourceId::Text("slug".to_string())
        );
    }
}
