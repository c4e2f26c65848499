//
//  freshdesk-cli
//  cli/ticket.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Helpdesk ticket commands.

use anyhow::Result;
use clap::Args;

use super::resource::CrudSubcommand;
use super::{GlobalOptions, Session};

const COLUMNS: &[&str] = &["display_id", "subject", "status_name", "priority_name", "requester_name"];

/// Manage helpdesk tickets.
///
/// Tickets are addressed by their display ID.
#[derive(Args, Debug)]
pub struct TicketCommand {
    #[command(subcommand)]
    pub command: CrudSubcommand,
}

impl TicketCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::from_global(global)?;
        self.command
            .run(&session.client.tickets(), &session.output, COLUMNS)
            .await
    }
}
