//
//  freshdesk-cli
//  interactive/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive Prompts Module
//!
//! Thin wrappers over `dialoguer` for the few places the CLI asks the user
//! something: the base URL and API key at login, and delete confirmation.
//!
//! # Example
//!
//! ```no_run
//! use freshdesk_cli::interactive::{prompt_confirm_with_default, prompt_password};
//!
//! let key = prompt_password("API key:").unwrap();
//! if prompt_confirm_with_default("Save key to keyring?", true).unwrap() {
//!     println!("Saved {} chars", key.len());
//! }
//! ```

use anyhow::Result;
use dialoguer::{Confirm, Input, Password};

/// True when both stdin and stdout are attached to a terminal.
pub fn is_interactive() -> bool {
    console::Term::stdout().is_term() && console::Term::stderr().is_term()
}

pub fn prompt_input(message: &str) -> Result<String> {
    let input: String = Input::new().with_prompt(message).interact_text()?;
    Ok(input)
}

pub fn prompt_password(message: &str) -> Result<String> {
    let password = Password::new().with_prompt(message).interact()?;
    Ok(password)
}

pub fn prompt_confirm_with_default(message: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(confirmed)
}
