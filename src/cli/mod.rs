//
//  freshdesk-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod auth;
mod config;
mod contact;
mod customer;
mod resource;
mod solution;
mod ticket;

pub use api::ApiCommand;
pub use auth::AuthCommand;
pub use config::ConfigCommand;
pub use contact::ContactCommand;
pub use customer::CustomerCommand;
pub use solution::SolutionCommand;
pub use ticket::TicketCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::api::{ApiError, FreshdeskClient};
use crate::api::client::{host_key, normalize_base_url};
use crate::auth::KeyringStore;
use crate::config::Config;
use crate::exit_codes;
use crate::output::{OutputFormat, OutputWriter};

/// Freshdesk CLI - Work with Freshdesk from the command line
#[derive(Parser, Debug)]
#[command(
    name = "fdesk",
    version,
    about = "Work with Freshdesk from the command line",
    long_about = "fdesk is a CLI for the Freshdesk helpdesk REST API.\n\n\
                  It brings contacts, customers, tickets and the knowledge base to your terminal.",
    propagate_version = true,
    after_help = "Use 'fdesk <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Freshdesk base URL, e.g. https://mycompany.freshdesk.com
    #[arg(long, global = true, env = "FDESK_URL")]
    pub url: Option<String>,

    /// API key (defaults to the key stored by 'fdesk auth login')
    #[arg(long, global = true, env = "FDESK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate with Freshdesk
    #[command(visible_alias = "login")]
    Auth(AuthCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Manage contacts
    #[command(visible_alias = "contacts")]
    Contact(ContactCommand),

    /// Manage customers (companies)
    #[command(visible_alias = "customers")]
    Customer(CustomerCommand),

    /// Manage helpdesk tickets
    #[command(visible_alias = "tickets")]
    Ticket(TicketCommand),

    /// Manage knowledge-base categories, folders and articles
    #[command(visible_alias = "kb")]
    Solution(SolutionCommand),

    /// Make API requests
    Api(ApiCommand),

    /// Print version information
    Version,
}

/// Failures the CLI reports with a dedicated exit code.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    NotAuthenticated(String),

    #[error("Operation cancelled")]
    Cancelled,
}

/// Maps an error chain to a process exit code.
///
/// HTTP 401 and missing credentials map to [`exit_codes::AUTH_ERROR`],
/// HTTP 404 to [`exit_codes::NOT_FOUND`].
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(cli) = cause.downcast_ref::<CliError>() {
            return match cli {
                CliError::NotAuthenticated(_) => exit_codes::AUTH_ERROR,
                CliError::Cancelled => exit_codes::CANCELLED,
            };
        }
        if let Some(api) = cause.downcast_ref::<ApiError>() {
            return match api.status() {
                Some(401) => exit_codes::AUTH_ERROR,
                Some(404) => exit_codes::NOT_FOUND,
                _ => exit_codes::ERROR,
            };
        }
    }
    exit_codes::ERROR
}

/// Everything a resource command needs: an authenticated client and a writer.
pub struct Session {
    pub client: FreshdeskClient,
    pub output: OutputWriter,
}

impl Session {
    /// Resolves the URL and API key and builds the client.
    ///
    /// The URL comes from `--url`/`FDESK_URL`, then `core.url` in the config.
    /// The key comes from `--api-key`/`FDESK_API_KEY`, then the keyring
    /// entry for the URL's host.
    pub fn from_global(global: &GlobalOptions) -> Result<Self> {
        let config = Config::load()?;
        let url = resolve_url(global, &config)?;
        let api_key = match &global.api_key {
            Some(key) => key.clone(),
            None => KeyringStore::new().get(&host_key(&url))?.ok_or_else(|| {
                CliError::NotAuthenticated(format!(
                    "No API key for {}. Run 'fdesk auth login' or pass --api-key",
                    host_key(&url)
                ))
            })?,
        };

        debug!("Using {}", url);
        Ok(Self {
            client: FreshdeskClient::new(&url, &api_key)?,
            output: output_writer(global, &config),
        })
    }
}

/// Base URL from the flag or the config, normalized.
pub fn resolve_url(global: &GlobalOptions, config: &Config) -> Result<String> {
    let url = global
        .url
        .clone()
        .or_else(|| config.core.url.clone())
        .ok_or_else(|| {
            CliError::NotAuthenticated(
                "No Freshdesk URL configured. Run 'fdesk auth login' or pass --url".to_string(),
            )
        })?;
    Ok(normalize_base_url(&url)?)
}

/// `--json` wins; otherwise the configured default format.
pub fn output_writer(global: &GlobalOptions, config: &Config) -> OutputWriter {
    if global.json {
        return OutputWriter::json();
    }
    OutputWriter::new(config.core.output.parse().unwrap_or(OutputFormat::Table))
}
