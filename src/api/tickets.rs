//
//  freshdesk-cli
//  api/tickets.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Helpdesk tickets API
//!
//! Tickets sit under the `helpdesk` prefix (`/helpdesk/tickets.json`) and
//! are wrapped under `helpdesk_ticket`. Responses that come back as
//! `ticket` are handled by the envelope fallback.

use crate::api::client::FreshdeskClient;
use crate::api::endpoint::TICKETS;
use crate::api::resource::Resource;

impl FreshdeskClient {
    /// Helpdesk tickets (`/helpdesk/tickets.json`, envelope `helpdesk_ticket`).
    pub fn tickets(&self) -> Resource<'_> {
        Resource::new(self, TICKETS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_paths() {
        let client = FreshdeskClient::new("https://acme.freshdesk.com", "key").unwrap();
        let tickets = client.tickets();
        assert_eq!(tickets.endpoint(None).unwrap(), "/helpdesk/tickets.json");
        assert_eq!(
            tickets.endpoint(Some(&"17".into())).unwrap(),
            "/helpdesk/tickets/17.json"
        );
        assert_eq!(tickets.descriptor().envelope_key, "helpdesk_ticket");
    }
}
