//
//  freshdesk-cli
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands for the Freshdesk CLI.
//!
//! Login stores the helpdesk URL in the config file and the API key in the
//! system keyring, keyed by host, so several helpdesks can be used side by
//! side with `--url`.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use reqwest::Method;

use crate::api::client::{host_key, normalize_base_url};
use crate::api::{ApiError, FreshdeskClient, ListParams};
use crate::auth::{mask_key, read_key_from_stdin, validate_api_key, KeyringStore};
use crate::config::Config;
use crate::interactive::{prompt_confirm_with_default, prompt_input, prompt_password};

use super::GlobalOptions;

/// Authenticate with Freshdesk.
#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in to a Freshdesk helpdesk
    Login(LoginArgs),

    /// Log out of a Freshdesk helpdesk
    Logout(LogoutArgs),

    /// View authentication status
    Status(StatusArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Read the API key from standard input
    #[arg(long)]
    pub with_key: bool,

    /// Do not check the key against the API before saving it
    #[arg(long)]
    pub skip_verify: bool,
}

#[derive(Args, Debug)]
pub struct LogoutArgs {}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Show the API key (masked)
    #[arg(long, short = 'k')]
    pub show_key: bool,
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => login(args, global).await,
            AuthSubcommand::Logout(args) => logout(args, global).await,
            AuthSubcommand::Status(args) => status(args, global).await,
        }
    }
}

/// Performs the login flow.
async fn login(args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
    let keyring = KeyringStore::new();
    let mut config = Config::load()?;

    // Get the URL
    let url = match global.url.clone().or_else(|| config.core.url.clone()) {
        Some(url) => url,
        None => prompt_input("Freshdesk URL (e.g., https://mycompany.freshdesk.com):")?,
    };
    let url = normalize_base_url(&url)?;
    let host = host_key(&url);

    // Check if already logged in
    if !args.with_key && keyring.get(&host)?.is_some() {
        println!("Already logged in to {}", host);
        if !prompt_confirm_with_default("Re-authenticate?", false)? {
            return Ok(());
        }
    }

    // Get the key
    let api_key = if let Some(key) = &global.api_key {
        key.clone()
    } else if args.with_key {
        read_key_from_stdin()?
    } else {
        println!();
        println!("Your API key is under Profile Settings in the Freshdesk agent portal.");
        println!();
        prompt_password("API key:")?
    };

    if !validate_api_key(&api_key) {
        bail!("Invalid API key format");
    }

    if !args.skip_verify {
        println!("Validating API key...");
        if !verify_key(&url, &api_key).await? {
            bail!("API key was rejected by {}", host);
        }
    }

    // Store the key
    keyring.store(&host, &api_key)?;

    config.core.url = Some(url);
    config.save()?;

    println!("Logged in to {}", host);
    Ok(())
}

async fn logout(_args: &LogoutArgs, global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let url = match global.url.clone().or_else(|| config.core.url.clone()) {
        Some(url) => normalize_base_url(&url)?,
        None => {
            println!("Not logged in to any Freshdesk helpdesk");
            return Ok(());
        }
    };

    let host = host_key(&url);
    KeyringStore::new().delete(&host)?;
    println!("Logged out of {}", host);
    Ok(())
}

async fn status(args: &StatusArgs, global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let Some(url) = global.url.clone().or_else(|| config.core.url.clone()) else {
        println!("Not logged in to any Freshdesk helpdesk");
        println!();
        println!("Run 'fdesk auth login' to authenticate");
        return Ok(());
    };
    let url = normalize_base_url(&url)?;
    let host = host_key(&url);

    let key = match &global.api_key {
        Some(key) => Some(key.clone()),
        None => KeyringStore::new().get(&host)?,
    };

    println!("{}", host);
    let Some(key) = key else {
        println!("  Status: Not logged in");
        return Ok(());
    };

    let is_valid = verify_key(&url, &key).await.unwrap_or(false);
    println!(
        "  Status: {}",
        if is_valid { "Active" } else { "Invalid" }
    );
    if args.show_key {
        println!("  API key: {}", mask_key(&key));
    }

    Ok(())
}

/// Checks a key by requesting the first page of contacts; only HTTP 401 counts as rejected.
async fn verify_key(url: &str, api_key: &str) -> Result<bool> {
    let client = FreshdeskClient::new(url, api_key)?;
    let params = ListParams::new().with("page", "1");
    match client.raw(Method::GET, "/contacts.json", &params, None).await {
        Ok(_) => Ok(true),
        Err(ApiError::Api { status: 401, .. }) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
