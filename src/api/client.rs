//
//  freshdesk-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Freshdesk API
//!
//! This module provides the request dispatcher every resource wrapper goes
//! through. It handles authentication, JSON envelope wrapping and unwrapping,
//! and translation of non-success responses into [`ApiError::Api`].
//!
//! ## Response policy
//!
//! | Verb | Success value |
//! |------|---------------|
//! | GET, POST | Parsed body, unwrapped from its envelope |
//! | PUT, DELETE | Literal response body text, never parsed |
//!
//! Freshdesk answers PUT and DELETE with an empty or non-JSON body, so those
//! verbs hand the text back untouched for every resource type.
//!
//! ## Diagnostics
//!
//! The most recent response (method, URL, status and body) is kept on the
//! client and can be read with [`FreshdeskClient::last_response`]. It is
//! overwritten by every call.

use std::sync::Mutex;

use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::api::common::{unwrap_body, wrap, ApiError, Fields, ListParams, Unwrapped};
use crate::auth::AuthCredential;

/// Snapshot of the most recent HTTP response seen by a client.
#[derive(Debug, Clone, PartialEq)]
pub struct LastResponse {
    /// HTTP method of the request
    pub method: String,
    /// Absolute request URL, without query string
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Raw response body text
    pub body: String,
}

/// The main HTTP client for the Freshdesk REST API.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use freshdesk_cli::api::FreshdeskClient;
///
/// let client = FreshdeskClient::new("https://mycompany.freshdesk.com", "my-api-key")?;
/// assert_eq!(client.base_url(), "https://mycompany.freshdesk.com");
/// # Ok::<(), freshdesk_cli::api::ApiError>(())
/// ```
///
/// # Concurrency
///
/// Each operation awaits a single request. A client may be shared, but the
/// last-response slot is last-write-wins.
pub struct FreshdeskClient {
    /// The underlying HTTP client
    http: Client,
    /// Base URL without trailing slash, e.g. `https://mycompany.freshdesk.com`
    base_url: String,
    /// Credentials sent with every request
    auth: AuthCredential,
    /// Most recent response, for diagnostics
    last_response: Mutex<Option<LastResponse>>,
}

impl FreshdeskClient {
    /// Creates a client for `base_url` authenticating with `api_key`.
    ///
    /// A missing scheme defaults to `https://`; a trailing slash is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the URL cannot be parsed, or
    /// [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ApiError> {
        Self::with_auth(base_url, AuthCredential::api_key(api_key))
    }

    /// Creates a client with explicit credentials.
    pub fn with_auth(base_url: &str, auth: AuthCredential) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(base_url)?;
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
                .build()?,
            base_url,
            auth,
            last_response: Mutex::new(None),
        })
    }

    /// Returns the base URL all endpoint paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a copy of the last response observed, if any request was made.
    pub fn last_response(&self) -> Option<LastResponse> {
        self.last_response
            .lock()
            .map(|slot| slot.clone())
            .unwrap_or_default()
    }

    /// GET `path`; the body is parsed and unwrapped under `envelope_key`.
    pub async fn get(
        &self,
        path: &str,
        envelope_key: &str,
        params: &ListParams,
    ) -> Result<Unwrapped, ApiError> {
        let mut request = self.request(Method::GET, path);
        if !params.is_empty() {
            request = request.query(params.pairs());
        }
        let text = self.execute(Method::GET, path, request).await?;
        parse_and_unwrap(&text, envelope_key)
    }

    /// POST `fields` wrapped under `envelope_key`; the reply is unwrapped the same way.
    pub async fn post(
        &self,
        path: &str,
        envelope_key: &str,
        fields: &Fields,
    ) -> Result<Unwrapped, ApiError> {
        let request = self
            .request(Method::POST, path)
            .json(&wrap(envelope_key, fields));
        let text = self.execute(Method::POST, path, request).await?;
        parse_and_unwrap(&text, envelope_key)
    }

    /// PUT `fields` wrapped under `envelope_key`; returns the literal body text.
    pub async fn put(
        &self,
        path: &str,
        envelope_key: &str,
        fields: &Fields,
    ) -> Result<String, ApiError> {
        let request = self
            .request(Method::PUT, path)
            .json(&wrap(envelope_key, fields));
        self.execute(Method::PUT, path, request).await
    }

    /// DELETE `path`; returns the literal body text.
    pub async fn delete(&self, path: &str) -> Result<String, ApiError> {
        let request = self.request(Method::DELETE, path);
        self.execute(Method::DELETE, path, request).await
    }

    /// Sends an arbitrary request and returns the raw body text on success.
    ///
    /// No envelope handling is done; `body`, when given, is sent as JSON
    /// verbatim. Used by the `api` command.
    pub async fn raw(
        &self,
        method: Method,
        path: &str,
        params: &ListParams,
        body: Option<&Value>,
    ) -> Result<String, ApiError> {
        let mut request = self.request(method.clone(), path);
        if !params.is_empty() {
            request = request.query(params.pairs());
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(method, path, request).await
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, self.url(path));
        self.auth.apply_to_request(request)
    }

    /// Sends the request, records it as the last response and checks the status.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<String, ApiError> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!("{} {} -> {}", method, url, status.as_u16());
        trace!("Response body: {}", text);

        if let Ok(mut slot) = self.last_response.lock() {
            *slot = Some(LastResponse {
                method: method.to_string(),
                url,
                status: status.as_u16(),
                body: text.clone(),
            });
        }

        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

fn parse_and_unwrap(text: &str, envelope_key: &str) -> Result<Unwrapped, ApiError> {
    let body: Value = serde_json::from_str(text)?;
    unwrap_body(&body, envelope_key)
}

/// Normalizes a base URL: adds `https://` if no scheme, drops trailing slashes.
pub fn normalize_base_url(base_url: &str) -> Result<String, ApiError> {
    let trimmed = base_url.trim();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&with_scheme)?;
    if parsed.host_str().is_none() {
        return Err(ApiError::InvalidUrl(url::ParseError::EmptyHost));
    }

    Ok(with_scheme.trim_end_matches('/').to_string())
}

/// Host part of a base URL, used as the keyring account name.
pub fn host_key(base_url: &str) -> String {
    base_url
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string()
}
