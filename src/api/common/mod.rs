//
//  freshdesk-cli
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Freshdesk client
//!
//! This module provides the shared types used by every resource wrapper: the
//! error type, the record representation, envelope handling and list
//! parameters.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`Record`] - An opaque vendor record, passed through verbatim
//! - [`Fields`] - Caller-supplied field set for create and update
//! - Envelope helpers (re-exported from the [`envelope`] submodule)
//! - List parameters (re-exported from the [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use freshdesk_cli::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(e) if e.is_already_exists() => println!("Already exists"),
//!         Err(ApiError::Api { status, body }) => println!("HTTP {}: {}", status, body),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use serde_json::{Map, Value};
use thiserror::Error;

mod envelope;
mod pagination;

pub use envelope::*;
pub use pagination::*;

/// Status code Freshdesk answers with when a resource already exists.
///
/// The vendor uses 422 (Unprocessable Entity) rather than 409 for this case;
/// contact recovery keys off it.
pub const HTTP_ALREADY_EXISTS: u16 = 422;

/// A vendor record: string keys to JSON values, in the order the server sent them.
///
/// The library defines no schema for records.
pub type Record = Map<String, Value>;

/// Field set for create and update requests.
///
/// Same representation as [`Record`]; insertion order is preserved on the wire.
pub type Fields = Map<String, Value>;

/// Unified error type for all Freshdesk API operations.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `Api` | Non-2xx response, carries status and raw body |
/// | `MissingEnvelope` | Response lacked the envelope key and its fallback |
/// | `UnexpectedBody` | 2xx body that is not an object or array of objects |
/// | `MissingId` | A record needed for recovery has no `id` |
/// | `PathArity` | Wrong number of parent ids for a nested resource |
/// | `InvalidUrl` | Base URL could not be parsed |
/// | `Network` | Transport failure |
/// | `Json` | Body was not valid JSON |
///
/// # Example
///
/// ```rust
/// use freshdesk_cli::api::common::ApiError;
///
/// let err = ApiError::Api { status: 422, body: "exists".to_string() };
/// assert!(err.is_already_exists());
/// assert_eq!(err.status(), Some(422));
/// assert_eq!(err.to_string(), "HTTP 422: exists");
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status.
    ///
    /// The body is kept verbatim so callers can inspect vendor error payloads.
    #[error("HTTP {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// Neither the envelope key nor its shortened fallback was present.
    #[error("Response is missing envelope key '{key}'{}", fallback_note(.fallback))]
    MissingEnvelope {
        /// The envelope key that was expected
        key: String,
        /// The fallback key that was also tried, if the key has one
        fallback: Option<String>,
    },

    /// A success response whose JSON shape cannot be unwrapped.
    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),

    /// A record returned by the server carries no usable `id`.
    #[error("Record has no 'id' field")]
    MissingId,

    /// A nested resource was bound with the wrong number of parent ids.
    #[error("Path template expects {expected} parent id(s), got {got}")]
    PathArity {
        /// Placeholders in the path template
        expected: usize,
        /// Parent ids supplied
        got: usize,
    },

    /// The configured base URL is not a valid URL.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded as JSON.
    #[error("Invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),
}

fn fallback_note(fallback: &Option<String>) -> String {
    fallback
        .as_ref()
        .map(|f| format!(" (also tried '{}')", f))
        .unwrap_or_default()
}

impl ApiError {
    /// HTTP status of an [`ApiError::Api`] error, `None` for every other variant.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw body of an [`ApiError::Api`] error.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// True when the vendor reported that the resource already exists.
    pub fn is_already_exists(&self) -> bool {
        self.status() == Some(HTTP_ALREADY_EXISTS)
    }
}

/// Returns a record's `id` rendered as a path segment.
///
/// Freshdesk ids are numeric, but string ids are accepted as-is.
pub fn record_id(record: &Record) -> Result<String, ApiError> {
    match record.get("id") {
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(ApiError::MissingId),
    }
}
