//
//  freshdesk-cli
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Helpers shared by the CLI commands, mostly turning command-line arguments
//! into request fields and query parameters.
//!
//! ## Example
//!
//! ```rust
//! use freshdesk_cli::util::parse_fields;
//!
//! let fields = parse_fields(&["phone=555-0100".to_string(), "active=true".to_string()]).unwrap();
//! assert_eq!(fields["phone"], "555-0100");
//! assert_eq!(fields["active"], true);
//! ```

use anyhow::{bail, Result};
use serde_json::Value;

use crate::api::{Fields, ListParams};

/// Splits `key=value`, typing the value as JSON when it parses and as a string otherwise.
///
/// `-F count=3` sends the number 3, `-F tags=["a","b"]` sends an array, and
/// `-F name=Jane` sends the string "Jane". A value that must stay a string
/// despite looking like JSON can be quoted: `-F code='"007"'`.
pub fn parse_field(arg: &str) -> Result<(String, Value)> {
    let Some((key, raw)) = arg.split_once('=') else {
        bail!("Invalid field '{}': expected key=value", arg);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("Invalid field '{}': key is empty", arg);
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Parses repeated `key=value` arguments into fields, later keys overriding earlier ones.
pub fn parse_fields(args: &[String]) -> Result<Fields> {
    let mut fields = Fields::new();
    for arg in args {
        let (key, value) = parse_field(arg)?;
        fields.insert(key, value);
    }
    Ok(fields)
}

/// Parses repeated `key=value` arguments into query parameters, kept verbatim.
pub fn parse_params(args: &[String]) -> Result<ListParams> {
    let mut params = ListParams::new();
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("Invalid parameter '{}': expected key=value", arg);
        };
        params.set(key.trim(), value);
    }
    Ok(params)
}
