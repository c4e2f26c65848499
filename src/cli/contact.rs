//
//  freshdesk-cli
//  cli/contact.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Contact commands.
//!
//! Besides the generic operations, contacts can be created with `--enable`
//! to restore a deleted contact with the same email, and `ensure` returns
//! the existing contact when the email is taken.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::api::contacts::email_query;
use crate::api::{ContactState, ListParams};
use crate::util::{parse_fields, parse_params};

use super::resource::{self, DeleteArgs, EditArgs, ViewArgs};
use super::{GlobalOptions, Session};

const COLUMNS: &[&str] = &["id", "name", "email", "phone", "deleted"];

/// Manage contacts.
#[derive(Args, Debug)]
pub struct ContactCommand {
    #[command(subcommand)]
    pub command: ContactSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ContactSubcommand {
    /// List contacts
    #[command(visible_alias = "ls")]
    List(ContactListArgs),

    /// View a contact
    View(ViewArgs),

    /// Create a contact
    Create(ContactCreateArgs),

    /// Create a contact unless one with the email exists
    Ensure(ContactEnsureArgs),

    /// Update fields of a contact
    Edit(EditArgs),

    /// Delete a contact
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ContactListArgs {
    /// Contact state: verified, unverified, deleted or all
    #[arg(long, short = 's')]
    pub state: Option<ContactState>,

    /// Filter expression, e.g. "email is jane@example.com"
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Only the contact with this exact email
    #[arg(long, conflicts_with = "query")]
    pub email: Option<String>,

    /// Extra query parameter in key=value format (repeatable)
    #[arg(long = "param", short = 'P')]
    pub params: Vec<String>,

    /// Page to start from
    #[arg(long)]
    pub page: Option<u32>,

    /// Fetch every page instead of the first one
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct ContactCreateArgs {
    /// Contact name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Contact email
    #[arg(long, short = 'e')]
    pub email: String,

    /// Extra field in key=value format (repeatable)
    #[arg(long = "field", short = 'F')]
    pub fields: Vec<String>,

    /// Restore a deleted contact with the same email instead of failing
    #[arg(long)]
    pub enable: bool,
}

#[derive(Args, Debug)]
pub struct ContactEnsureArgs {
    /// Contact name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Contact email
    #[arg(long, short = 'e')]
    pub email: String,

    /// Extra field in key=value format (repeatable)
    #[arg(long = "field", short = 'F')]
    pub fields: Vec<String>,
}

impl ContactCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::from_global(global)?;
        let contacts = session.client.contacts();
        let output = &session.output;

        match &self.command {
            ContactSubcommand::List(args) => {
                let mut params = match (&args.email, args.state) {
                    (Some(email), state) => email_query(state.unwrap_or(ContactState::All), email),
                    (None, _) => {
                        let mut params = ListParams::new();
                        if let Some(state) = args.state {
                            params.set("state", state.as_str());
                        }
                        if let Some(query) = &args.query {
                            params.set("query", query.as_str());
                        }
                        params
                    }
                };
                for (key, value) in parse_params(&args.params)?.pairs() {
                    params.set(key.as_str(), value.as_str());
                }
                if let Some(page) = args.page {
                    params.set("page", page.to_string());
                }

                let records = contacts
                    .list(&params, args.all)
                    .await
                    .context("Failed to list contacts")?;
                output.write_records(&records, COLUMNS)
            }
            ContactSubcommand::View(args) => resource::view(&contacts, args, output).await,
            ContactSubcommand::Create(args) => {
                let fields = parse_fields(&args.fields)?;
                let result = if args.enable {
                    contacts
                        .create_or_enable(&args.name, &args.email, &fields)
                        .await
                } else {
                    contacts.create(&args.name, &args.email, &fields).await
                };
                let record =
                    result.with_context(|| format!("Failed to create contact {}", args.email))?;
                output.write_record(&record)
            }
            ContactSubcommand::Ensure(args) => {
                let fields = parse_fields(&args.fields)?;
                let (created, record) = contacts
                    .get_or_create(&args.name, &args.email, &fields)
                    .await
                    .with_context(|| format!("Failed to ensure contact {}", args.email))?;
                if created {
                    output.write_success(&format!("Created contact {}", args.email));
                } else {
                    output.write_success(&format!("Contact {} already exists", args.email));
                }
                output.write_record(&record)
            }
            ContactSubcommand::Edit(args) => resource::edit(&contacts, args, output).await,
            ContactSubcommand::Delete(args) => resource::delete(&contacts, args, output).await,
        }
    }
}
