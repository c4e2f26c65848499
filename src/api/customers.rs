//
//  freshdesk-cli
//  api/customers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Customers (companies) API
//!
//! Customers live at `/customers.json` and are wrapped under the `customer`
//! key. Apart from requiring a name on creation they behave like any other
//! [`Resource`].

use std::ops::Deref;

use serde_json::Value;

use crate::api::client::FreshdeskClient;
use crate::api::common::{ApiError, Fields, Record};
use crate::api::endpoint::CUSTOMERS;
use crate::api::resource::Resource;

/// Wrapper for the customers resource.
pub struct Customers<'a> {
    resource: Resource<'a>,
}

impl<'a> Deref for Customers<'a> {
    type Target = Resource<'a>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

impl<'a> Customers<'a> {
    pub fn new(client: &'a FreshdeskClient) -> Self {
        Self {
            resource: Resource::new(client, CUSTOMERS),
        }
    }

    /// Creates a customer named `name` with any extra `fields`.
    pub async fn create(&self, name: &str, fields: &Fields) -> Result<Record, ApiError> {
        let mut body = Fields::new();
        body.insert("name".to_string(), Value::from(name));
        for (key, value) in fields {
            body.entry(key.clone()).or_insert_with(|| value.clone());
        }
        self.resource.create(&body).await
    }
}

impl FreshdeskClient {
    /// Customers (`/customers.json`, envelope `customer`).
    pub fn customers(&self) -> Customers<'_> {
        Customers::new(self)
    }
}
