//
//  freshdesk-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides a thin client over the Freshdesk REST API.
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: Request dispatcher with authentication, envelope handling and error translation
//! - [`endpoint`]: Resource descriptors and endpoint path construction
//! - [`resource`]: Generic CRUD wrapper parameterized by a descriptor
//! - [`contacts`], [`customers`], [`tickets`], [`solutions`]: Concrete resources
//! - [`common`]: Shared types (errors, records, envelopes, list parameters)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use freshdesk_cli::api::{FreshdeskClient, ListParams};
//!
//! # async fn example() -> Result<(), freshdesk_cli::api::ApiError> {
//! let client = FreshdeskClient::new("https://mycompany.freshdesk.com", "api-key")?;
//!
//! let contacts = client
//!     .contacts()
//!     .list(&ListParams::new().with("state", "all"), true)
//!     .await?;
//!
//! for contact in &contacts {
//!     println!("{} <{}>", contact["name"], contact["email"]);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every non-2xx response becomes [`ApiError::Api`] with the status code and
//! raw body. Status 422 means "already exists" and is what the contact
//! recovery helpers react to.

/// Request dispatcher for the Freshdesk API.
pub mod client;

/// Shared types: errors, records, envelopes and list parameters.
pub mod common;

/// Contacts, including conflict recovery on create.
pub mod contacts;

/// Customers (companies).
pub mod customers;

/// Resource descriptors and endpoint paths.
pub mod endpoint;

/// Generic CRUD wrapper.
pub mod resource;

/// Knowledge-base categories, folders and articles.
pub mod solutions;

/// Helpdesk tickets.
pub mod tickets;

pub use client::{FreshdeskClient, LastResponse};
pub use common::{ApiError, Fields, ListParams, Record};
pub use contacts::{ContactState, Contacts};
pub use customers::Customers;
pub use endpoint::{endpoint, ResourceDescriptor, ResourceId};
pub use resource::Resource;
