//
//  freshdesk-cli
//  api/resource.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Generic CRUD wrapper over one Freshdesk resource type.
//!
//! A [`Resource`] pairs a [`ResourceDescriptor`] with the parent ids its path
//! template needs and borrows the client that sends the requests. It holds
//! no other state.
//!
//! # Example
//!
//! ```rust,no_run
//! use freshdesk_cli::api::{FreshdeskClient, ListParams};
//! use freshdesk_cli::api::common::Fields;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), freshdesk_cli::api::ApiError> {
//! let client = FreshdeskClient::new("https://acme.freshdesk.com", "key")?;
//! let folders = client.solution_folders(3u64);
//!
//! let mut fields = Fields::new();
//! fields.insert("name".into(), json!("Getting started"));
//! let folder = folders.create(&fields).await?;
//!
//! let all = folders.list(&ListParams::new(), true).await?;
//! println!("{} folders, created {}", all.len(), folder["id"]);
//! # Ok(())
//! # }
//! ```

use tracing::debug;

use crate::api::client::FreshdeskClient;
use crate::api::common::{ApiError, Fields, ListParams, Record};
use crate::api::endpoint::{endpoint, ResourceDescriptor, ResourceId};

/// CRUD operations for one resource type.
#[derive(Clone)]
pub struct Resource<'a> {
    client: &'a FreshdeskClient,
    descriptor: ResourceDescriptor,
    parents: Vec<ResourceId>,
}

impl<'a> Resource<'a> {
    /// A top-level resource (no parent ids).
    pub fn new(client: &'a FreshdeskClient, descriptor: ResourceDescriptor) -> Self {
        Self::nested(client, descriptor, Vec::new())
    }

    /// A resource whose path template is filled with `parents`.
    ///
    /// Arity is checked when a path is built, so a mismatch surfaces as
    /// [`ApiError::PathArity`] from the first operation.
    pub fn nested(
        client: &'a FreshdeskClient,
        descriptor: ResourceDescriptor,
        parents: Vec<ResourceId>,
    ) -> Self {
        Self {
            client,
            descriptor,
            parents,
        }
    }

    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    /// Relative path of the collection (`id == None`) or of one item.
    pub fn endpoint(&self, id: Option<&ResourceId>) -> Result<String, ApiError> {
        let prefix = self.descriptor.prefix(&self.parents)?;
        Ok(endpoint(self.descriptor.resource_name, id, Some(&prefix)))
    }

    /// POSTs `fields` to the collection and returns the created record.
    pub async fn create(&self, fields: &Fields) -> Result<Record, ApiError> {
        let path = self.endpoint(None)?;
        self.client
            .post(&path, self.descriptor.envelope_key, fields)
            .await?
            .into_record()
    }

    /// PUTs `fields` to one item and returns the literal response body.
    pub async fn update(
        &self,
        id: impl Into<ResourceId>,
        fields: &Fields,
    ) -> Result<String, ApiError> {
        let path = self.endpoint(Some(&id.into()))?;
        self.client
            .put(&path, self.descriptor.envelope_key, fields)
            .await
    }

    /// DELETEs one item and returns the literal response body.
    pub async fn delete(&self, id: impl Into<ResourceId>) -> Result<String, ApiError> {
        let path = self.endpoint(Some(&id.into()))?;
        self.client.delete(&path).await
    }

    /// GETs one item.
    pub async fn get(&self, id: impl Into<ResourceId>) -> Result<Record, ApiError> {
        let path = self.endpoint(Some(&id.into()))?;
        self.client
            .get(&path, self.descriptor.envelope_key, &ListParams::new())
            .await?
            .into_record()
    }

    /// Lists the collection.
    ///
    /// With `fetch_all == false` only the first page is returned. Otherwise
    /// the `page` parameter is incremented and results accumulated until the
    /// server returns an empty page or the page number would pass `u32::MAX`.
    /// There is no other bound: a server that never returns an empty page
    /// keeps this looping.
    pub async fn list(&self, params: &ListParams, fetch_all: bool) -> Result<Vec<Record>, ApiError> {
        let path = self.endpoint(None)?;
        let key = self.descriptor.envelope_key;

        let mut records = self.client.get(&path, key, params).await?.into_records();
        if !fetch_all || records.is_empty() {
            return Ok(records);
        }

        let mut page = params.start_page();
        while let Some(next) = page.checked_add(1) {
            page = next;
            let batch = self
                .client
                .get(&path, key, &params.with_page(page))
                .await?
                .into_records();
            if batch.is_empty() {
                break;
            }
            records.extend(batch);
        }

        debug!(
            "Fetched {} {} in {} request(s)",
            records.len(),
            self.descriptor.resource_name,
            page - params.start_page() + 1
        );
        Ok(records)
    }
}

impl FreshdeskClient {
    /// Generic wrapper for any descriptor, e.g. one not covered by a helper.
    pub fn resource(&self, descriptor: ResourceDescriptor, parents: Vec<ResourceId>) -> Resource<'_> {
        Resource::nested(self, descriptor, parents)
    }
}
