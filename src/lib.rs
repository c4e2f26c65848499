//
//  freshdesk-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Freshdesk CLI Library
//!
//! A thin client for the Freshdesk REST API plus the `fdesk` command-line tool
//! built on top of it.
//!
//! ## Overview
//!
//! Every Freshdesk resource is addressed as `/<prefix>/<resource>[/<id>].json`
//! and wraps its payload in an envelope object keyed by the resource's
//! envelope key (`user`, `customer`, `helpdesk_ticket`, ...). The library
//! builds those paths, wraps and unwraps the envelopes, pages through list
//! results and turns HTTP failures into typed errors.
//!
//! ## Features
//!
//! - **Generic CRUD**: create, read, update, delete and list for any resource
//! - **Automatic pagination**: Fetch every page of a list with one call
//! - **Contact recovery**: Restore deleted contacts and get-or-create by email
//! - **Knowledge base**: Categories, folders and articles with nested paths
//! - **Secure Authentication**: API keys stored in the system keyring
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client and resources
//! - [`auth`]: API key credentials and keychain storage
//! - [`cli`]: Command-line interface definitions using clap
//! - [`config`]: Configuration file management
//! - [`output`]: Output formatting (Table, JSON)
//! - [`interactive`]: Interactive prompts
//! - [`util`]: Argument parsing helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use freshdesk_cli::api::{FreshdeskClient, ListParams};
//!
//! # async fn example() -> Result<(), freshdesk_cli::api::ApiError> {
//! let client = FreshdeskClient::new("https://acme.freshdesk.com", "api-key")?;
//! let tickets = client.tickets().list(&ListParams::new(), true).await?;
//! println!("{} tickets", tickets.len());
//! # Ok(())
//! # }
//! ```

/// API client and Freshdesk resources.
///
/// The client handles authentication, envelopes, pagination and error
/// translation; resources are described by data rather than types.
pub mod api;

/// API key credentials and keychain storage.
pub mod auth;

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Interactive prompts.
pub mod interactive;

/// Output formatting for tables and JSON.
pub mod output;

/// Argument parsing helpers.
pub mod util;

pub use api::FreshdeskClient;

pub use cli::Cli;

pub use config::Config;

/// Binary name, also used for the config directory and the User-Agent.
pub const APP_NAME: &str = "fdesk";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process exit codes.
///
/// Values are powers of two so scripts can tell failure classes apart.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    ///
    /// No API key is available or Freshdesk rejected it with HTTP 401.
    /// Run `fdesk auth login` to authenticate.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found (HTTP 404).
    pub const NOT_FOUND: i32 = 8;

    /// Operation cancelled by user, typically by declining a confirmation prompt.
    pub const CANCELLED: i32 = 16;
}
