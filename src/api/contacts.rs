//
//  freshdesk-cli
//  api/contacts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Contacts API
//!
//! Contacts live at `/contacts.json` and are wrapped under the `user` key.
//!
//! Freshdesk refuses to create two contacts with the same email, even when
//! the existing one is deleted, and reports the clash with HTTP 422. The
//! recovery helpers here turn that into idempotent-create semantics:
//!
//! - [`Contacts::create_or_enable`] restores a deleted contact instead of
//!   failing
//! - [`Contacts::get_or_create`] returns the existing contact when the email
//!   is already taken
//!
//! # Example
//!
//! ```rust,no_run
//! use freshdesk_cli::api::FreshdeskClient;
//! use freshdesk_cli::api::common::Fields;
//!
//! # async fn example() -> Result<(), freshdesk_cli::api::ApiError> {
//! let client = FreshdeskClient::new("https://acme.freshdesk.com", "key")?;
//! let (created, contact) = client
//!     .contacts()
//!     .get_or_create("Jane Doe", "jane@example.com", &Fields::new())
//!     .await?;
//! println!("created={} id={}", created, contact["id"]);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::ops::Deref;

use serde_json::Value;
use tracing::{debug, info};

use crate::api::client::FreshdeskClient;
use crate::api::common::{record_id, ApiError, Fields, ListParams, Record};
use crate::api::endpoint::CONTACTS;
use crate::api::resource::Resource;

/// Contact states accepted by the `state` list filter.
///
/// Listing without a state returns verified contacts only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactState {
    /// Deleted contacts
    Deleted,
    /// Contacts in any state
    All,
    /// Verified contacts (the server default)
    Verified,
    /// Contacts that have not verified their email
    Unverified,
}

impl ContactState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deleted => "deleted",
            Self::All => "all",
            Self::Verified => "verified",
            Self::Unverified => "unverified",
        }
    }
}

impl fmt::Display for ContactState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContactState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deleted" => Ok(Self::Deleted),
            "all" => Ok(Self::All),
            "verified" => Ok(Self::Verified),
            "unverified" => Ok(Self::Unverified),
            other => Err(format!(
                "unknown contact state '{}' (expected deleted, all, verified or unverified)",
                other
            )),
        }
    }
}

/// Query parameters selecting contacts in `state` whose email is exactly `email`.
pub fn email_query(state: ContactState, email: &str) -> ListParams {
    ListParams::new()
        .with("state", state.as_str())
        .with("query", format!("email is {}", email))
}

/// Wrapper for the contacts resource.
///
/// Dereferences to [`Resource`] for the generic operations; `create` is
/// shadowed by the name/email form below.
pub struct Contacts<'a> {
    resource: Resource<'a>,
}

impl<'a> Deref for Contacts<'a> {
    type Target = Resource<'a>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

impl<'a> Contacts<'a> {
    pub fn new(client: &'a FreshdeskClient) -> Self {
        Self {
            resource: Resource::new(client, CONTACTS),
        }
    }

    /// Creates a contact; `name` and `email` win over same-named keys in `fields`.
    pub async fn create(&self, name: &str, email: &str, fields: &Fields) -> Result<Record, ApiError> {
        let body = contact_fields(name, email, fields);
        self.resource.create(&body).await
    }

    /// First page of contacts in `state` with exactly this email.
    pub async fn find_by_email(&self, state: ContactState, email: &str) -> Result<Vec<Record>, ApiError> {
        self.resource.list(&email_query(state, email), false).await
    }

    /// Creates a contact, restoring a deleted one with the same email instead of failing.
    ///
    /// When creation fails with 422 and a deleted contact with this email
    /// exists, that contact is updated with `name`, `deleted = false` and
    /// `fields`. The returned record is the deleted record merged locally
    /// with those values; it is not re-fetched.
    ///
    /// # Errors
    ///
    /// The original creation error is returned when it is not a 422 or when
    /// no deleted contact matches.
    pub async fn create_or_enable(
        &self,
        name: &str,
        email: &str,
        fields: &Fields,
    ) -> Result<Record, ApiError> {
        let err = match self.create(name, email, fields).await {
            Ok(contact) => return Ok(contact),
            Err(err) if err.is_already_exists() => err,
            Err(err) => return Err(err),
        };

        let mut deleted = self.find_by_email(ContactState::Deleted, email).await?;
        if deleted.is_empty() {
            debug!("No deleted contact for {}, keeping conflict", email);
            return Err(err);
        }

        let mut contact = deleted.swap_remove(0);
        let id = record_id(&contact)?;

        let mut update = Fields::new();
        update.insert("name".to_string(), Value::from(name));
        update.insert("deleted".to_string(), Value::Bool(false));
        for (key, value) in fields {
            update.entry(key.clone()).or_insert_with(|| value.clone());
        }
        self.resource.update(id.as_str(), &update).await?;
        info!("Restored deleted contact {} ({})", id, email);

        contact.insert("name".to_string(), Value::from(name));
        for (key, value) in fields {
            if key != "name" && key != "deleted" {
                contact.insert(key.clone(), value.clone());
            }
        }
        contact.insert("deleted".to_string(), Value::Bool(false));
        Ok(contact)
    }

    /// Returns `(true, contact)` after creating it, `(false, contact)` if the email exists.
    ///
    /// Creation goes through [`create_or_enable`](Self::create_or_enable).
    /// On a remaining 422 the contact is looked up by email across all
    /// states and the first match is returned.
    pub async fn get_or_create(
        &self,
        name: &str,
        email: &str,
        fields: &Fields,
    ) -> Result<(bool, Record), ApiError> {
        let err = match self.create_or_enable(name, email, fields).await {
            Ok(contact) => return Ok((true, contact)),
            Err(err) if err.is_already_exists() => err,
            Err(err) => return Err(err),
        };

        match self
            .find_by_email(ContactState::All, email)
            .await?
            .into_iter()
            .next()
        {
            Some(contact) => Ok((false, contact)),
            None => Err(err),
        }
    }
}

fn contact_fields(name: &str, email: &str, fields: &Fields) -> Fields {
    let mut body = Fields::new();
    body.insert("name".to_string(), Value::from(name));
    body.insert("email".to_string(), Value::from(email));
    for (key, value) in fields {
        body.entry(key.clone()).or_insert_with(|| value.clone());
    }
    body
}

impl FreshdeskClient {
    /// Contacts (`/contacts.json`, envelope `user`).
    pub fn contacts(&self) -> Contacts<'_> {
        Contacts::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_query() {
        let params = email_query(ContactState::Deleted, "jane@example.com");
        assert_eq!(params.get("state"), Some("deleted"));
        assert_eq!(params.get("query"), Some("email is jane@example.com"));
    }

    #[test]
    fn test_contact_state_parse() {
        assert_eq!("ALL".parse::<ContactState>().unwrap(), ContactState::All);
        assert_eq!(ContactState::Unverified.to_string(), "unverified");
        assert!("archived".parse::<ContactState>().is_err());
    }

    #[test]
    fn test_contact_fields_order_and_precedence() {
        let mut extra = Fields::new();
        extra.insert("email".to_string(), json!("other@example.com"));
        extra.insert("phone".to_string(), json!("555"));

        let body = contact_fields("Jane", "jane@example.com", &extra);
        let keys: Vec<&str> = body.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "email", "phone"]);
        assert_eq!(body["email"], "jane@example.com");
    }
}
