//
//  freshdesk-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Freshdesk authenticates API calls with HTTP Basic auth, using the agent's
//! API key as the username and a fixed placeholder as the password.
//!
//! ## Module Structure
//!
//! - [`keyring`]: Secure storage of API keys in the system keyring
//!
//! ## Example
//!
//! ```rust
//! use freshdesk_cli::auth::AuthCredential;
//!
//! let credential = AuthCredential::api_key("abcdef123456");
//! assert_eq!(credential.masked(), "abcd...3456");
//! ```

mod keyring;

pub use keyring::*;

use reqwest::RequestBuilder;

/// Password sent alongside an API key; Freshdesk ignores its value.
pub const API_KEY_PASSWORD: &str = "X";

/// Credentials for the Freshdesk API.
#[derive(Clone)]
pub enum AuthCredential {
    /// Agent API key, sent as the Basic-auth username.
    ApiKey {
        /// The API key from the agent's profile settings.
        key: String,
    },
}

impl std::fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey { key } => f
                .debug_struct("ApiKey")
                .field("key", &mask_key(key))
                .finish(),
        }
    }
}

impl AuthCredential {
    /// Builds an API-key credential.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey { key: key.into() }
    }

    /// Adds the Basic-auth header to `request`.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::ApiKey { key } => request.basic_auth(key, Some(API_KEY_PASSWORD)),
        }
    }

    /// The secret with everything but its first and last four characters hidden.
    pub fn masked(&self) -> String {
        match self {
            Self::ApiKey { key } => mask_key(key),
        }
    }
}

/// Masks a key for display (shows first and last 4 characters).
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

/// Reads an API key from the first line of standard input.
///
/// Supports piped input: `echo "$KEY" | fdesk auth login --with-key`.
pub fn read_key_from_stdin() -> std::io::Result<String> {
    use std::io::BufRead;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Basic sanity check on a pasted API key.
pub fn validate_api_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && !key.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("short"), "*****");
        assert_eq!(mask_key("abcdefghijkl"), "abcd...ijkl");
    }

    #[test]
    fn test_debug_hides_key() {
        let credential = AuthCredential::api_key("supersecretkey1234");
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("supersecretkey1234"));
        assert!(debug.contains("supe...1234"));
    }

    #[test]
    fn test_validate_api_key() {
        assert!(validate_api_key("AbC123xyz"));
        assert!(!validate_api_key("   "));
        assert!(!validate_api_key("has space"));
    }
}
