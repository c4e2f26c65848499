//
//  freshdesk-cli
//  cli/customer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Customer (company) commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::util::parse_fields;

use super::resource::{self, DeleteArgs, EditArgs, ListArgs, ViewArgs};
use super::{GlobalOptions, Session};

const COLUMNS: &[&str] = &["id", "name", "domains", "description"];

/// Manage customers.
#[derive(Args, Debug)]
pub struct CustomerCommand {
    #[command(subcommand)]
    pub command: CustomerSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CustomerSubcommand {
    /// List customers
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View a customer
    View(ViewArgs),

    /// Create a customer
    Create(CustomerCreateArgs),

    /// Update fields of a customer
    Edit(EditArgs),

    /// Delete a customer
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct CustomerCreateArgs {
    /// Customer name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Extra field in key=value format (repeatable)
    #[arg(long = "field", short = 'F')]
    pub fields: Vec<String>,
}

impl CustomerCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::from_global(global)?;
        let customers = session.client.customers();
        let output = &session.output;

        match &self.command {
            CustomerSubcommand::List(args) => resource::list(&customers, args, output, COLUMNS).await,
            CustomerSubcommand::View(args) => resource::view(&customers, args, output).await,
            CustomerSubcommand::Create(args) => {
                let fields = parse_fields(&args.fields)?;
                let record = customers
                    .create(&args.name, &fields)
                    .await
                    .with_context(|| format!("Failed to create customer {}", args.name))?;
                output.write_record(&record)
            }
            CustomerSubcommand::Edit(args) => resource::edit(&customers, args, output).await,
            CustomerSubcommand::Delete(args) => resource::delete(&customers, args, output).await,
        }
    }
}
