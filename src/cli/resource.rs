//
//  freshdesk-cli
//  cli/resource.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Subcommands shared by every resource command.
//!
//! Tickets and the knowledge-base resources expose exactly the generic
//! operations, so they use [`CrudSubcommand`] as is. Contacts and customers
//! reuse the argument structs and runners with their own create forms.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::api::{ListParams, Resource, ResourceId};
use crate::interactive::{is_interactive, prompt_confirm_with_default};
use crate::output::OutputWriter;
use crate::util::{parse_fields, parse_params};

use super::CliError;

/// Generic resource operations.
#[derive(Subcommand, Debug)]
pub enum CrudSubcommand {
    /// List records
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View one record
    View(ViewArgs),

    /// Create a record from fields
    Create(CreateArgs),

    /// Update fields of a record
    Edit(EditArgs),

    /// Delete a record
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Query parameter in key=value format (repeatable)
    #[arg(long = "param", short = 'P')]
    pub params: Vec<String>,

    /// Page to start from
    #[arg(long)]
    pub page: Option<u32>,

    /// Fetch every page instead of the first one
    #[arg(long)]
    pub all: bool,
}

impl ListArgs {
    /// Query parameters from `--param` and `--page`.
    pub fn to_params(&self) -> Result<ListParams> {
        let mut params = parse_params(&self.params)?;
        if let Some(page) = self.page {
            params.set("page", page.to_string());
        }
        Ok(params)
    }
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Record ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Field in key=value format; JSON values are typed (repeatable)
    #[arg(long = "field", short = 'F', required = true)]
    pub fields: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Record ID
    pub id: String,

    /// Field in key=value format; JSON values are typed (repeatable)
    #[arg(long = "field", short = 'F', required = true)]
    pub fields: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Record ID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub confirm: bool,
}

impl CrudSubcommand {
    /// Runs the operation against `resource`, showing `columns` in list tables.
    pub async fn run(
        &self,
        resource: &Resource<'_>,
        output: &OutputWriter,
        columns: &[&str],
    ) -> Result<()> {
        match self {
            Self::List(args) => list(resource, args, output, columns).await,
            Self::View(args) => view(resource, args, output).await,
            Self::Create(args) => create(resource, args, output).await,
            Self::Edit(args) => edit(resource, args, output).await,
            Self::Delete(args) => delete(resource, args, output).await,
        }
    }
}

fn label(resource: &Resource<'_>) -> &'static str {
    resource.descriptor().resource_name
}

pub async fn list(
    resource: &Resource<'_>,
    args: &ListArgs,
    output: &OutputWriter,
    columns: &[&str],
) -> Result<()> {
    let params = args.to_params()?;
    let records = resource
        .list(&params, args.all)
        .await
        .with_context(|| format!("Failed to list {}", label(resource)))?;
    output.write_records(&records, columns)
}

pub async fn view(resource: &Resource<'_>, args: &ViewArgs, output: &OutputWriter) -> Result<()> {
    let record = resource
        .get(ResourceId::from(args.id.as_str()))
        .await
        .with_context(|| format!("Failed to get {} {}", label(resource), args.id))?;
    output.write_record(&record)
}

pub async fn create(resource: &Resource<'_>, args: &CreateArgs, output: &OutputWriter) -> Result<()> {
    let fields = parse_fields(&args.fields)?;
    let record = resource
        .create(&fields)
        .await
        .with_context(|| format!("Failed to create {}", label(resource)))?;
    output.write_record(&record)
}

pub async fn edit(resource: &Resource<'_>, args: &EditArgs, output: &OutputWriter) -> Result<()> {
    let fields = parse_fields(&args.fields)?;
    let body = resource
        .update(ResourceId::from(args.id.as_str()), &fields)
        .await
        .with_context(|| format!("Failed to update {} {}", label(resource), args.id))?;
    output.write_success(&format!("Updated {} {}", label(resource), args.id));
    output.write_body(&body)
}

pub async fn delete(resource: &Resource<'_>, args: &DeleteArgs, output: &OutputWriter) -> Result<()> {
    confirm_delete(label(resource), &args.id, args.confirm)?;
    let body = resource
        .delete(ResourceId::from(args.id.as_str()))
        .await
        .with_context(|| format!("Failed to delete {} {}", label(resource), args.id))?;
    output.write_success(&format!("Deleted {} {}", label(resource), args.id));
    output.write_body(&body)
}

/// Asks before deleting unless `confirmed`; refuses when there is no terminal to ask on.
fn confirm_delete(label: &str, id: &str, confirmed: bool) -> Result<()> {
    if confirmed {
        return Ok(());
    }
    if !is_interactive() {
        anyhow::bail!("Refusing to delete {} {} without --confirm", label, id);
    }
    if !prompt_confirm_with_default(&format!("Delete {} {}?", label, id), false)? {
        return Err(CliError::Cancelled.into());
    }
    Ok(())
}
