//
//  freshdesk-cli
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Secure Credential Storage Module
//!
//! API keys are kept in the system's native keyring rather than in the
//! configuration file.
//!
//! ## Storage Model
//!
//! - **Service**: Application identifier (`freshdesk-cli`)
//! - **Account**: The Freshdesk host, e.g. `mycompany.freshdesk.com`
//! - **Secret**: The API key
//!
//! ## Example
//!
//! ```rust,no_run
//! use freshdesk_cli::auth::KeyringStore;
//!
//! fn manage_credentials() -> anyhow::Result<()> {
//!     let store = KeyringStore::new();
//!     store.store("mycompany.freshdesk.com", "api-key")?;
//!     if let Some(key) = store.get("mycompany.freshdesk.com")? {
//!         println!("Found stored key ({} chars)", key.len());
//!     }
//!     store.delete("mycompany.freshdesk.com")?;
//!     Ok(())
//! }
//! ```

use anyhow::Result;
use keyring::Entry;

const SERVICE_NAME: &str = "freshdesk-cli";

/// Keyring-backed storage of API keys, one entry per host.
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    pub fn store(&self, host: &str, api_key: &str) -> Result<()> {
        let entry = Entry::new(&self.service, host)?;
        entry.set_password(api_key)?;
        Ok(())
    }

    pub fn get(&self, host: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, host)?;
        match entry.get_password() {
            Ok(key) => Ok(Some(key)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn delete(&self, host: &str) -> Result<()> {
        let entry = Entry::new(&self.service, host)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()), // Already deleted
            Err(e) => Err(e.into()),
        }
    }
}
