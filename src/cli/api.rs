//
//  freshdesk-cli
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! This command sends a request to any Freshdesk endpoint through the same
//! client the other commands use. It's useful for endpoints that aren't
//! covered by other commands or for debugging.
//!
//! ## Examples
//!
//! ```bash
//! # Raw body of a GET
//! fdesk api /contacts.json -P state=all
//!
//! # Unwrapped records, using the envelope key
//! fdesk api /helpdesk/tickets/12.json --envelope helpdesk_ticket
//!
//! # Create with fields wrapped under the envelope
//! fdesk api -X POST /customers.json --envelope customer -F name="Acme"
//!
//! # Show the status line of the response
//! fdesk api -i -X DELETE /contacts/9.json
//! ```

use std::fs;

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use reqwest::Method;
use serde_json::Value;

use crate::api::common::Unwrapped;
use crate::api::FreshdeskClient;
use crate::output::{write_json, OutputWriter};
use crate::util::{parse_fields, parse_params};

use super::{GlobalOptions, Session};

/// Make an API request.
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// Endpoint path, e.g. /contacts.json
    pub endpoint: String,

    /// HTTP method
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Body field in key=value format; JSON values are typed (repeatable)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Query parameter in key=value format (repeatable)
    #[arg(long = "param", short = 'P', action = clap::ArgAction::Append)]
    pub params: Vec<String>,

    /// Read the JSON body from a file ("-" for stdin)
    #[arg(long, short = 'f', conflicts_with = "field")]
    pub input: Option<String>,

    /// Envelope key to wrap the body in and unwrap the response from
    #[arg(long, short = 'e')]
    pub envelope: Option<String>,

    /// Print the response status line
    #[arg(long, short = 'i')]
    pub include: bool,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = Session::from_global(global)?;
        let method = self.parse_method()?;

        let result = match &self.envelope {
            Some(key) => self.send_enveloped(&session, &method, key).await,
            None => self.send_raw(&session, &method).await,
        };

        if self.include {
            print_status(&session.client);
        }
        result
    }

    fn parse_method(&self) -> Result<Method> {
        match self.method.to_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            "PATCH" => Ok(Method::PATCH),
            other => bail!("Unsupported HTTP method: {}", other),
        }
    }

    fn build_body(&self) -> Result<Option<Value>> {
        if let Some(input) = &self.input {
            let content = if input == "-" {
                std::io::read_to_string(std::io::stdin())?
            } else {
                fs::read_to_string(input)
                    .with_context(|| format!("Failed to read input file: {}", input))?
            };
            return Ok(Some(serde_json::from_str(&content)?));
        }
        if self.field.is_empty() {
            return Ok(None);
        }
        Ok(Some(Value::Object(parse_fields(&self.field)?)))
    }

    async fn send_raw(&self, session: &Session, method: &Method) -> Result<()> {
        let params = parse_params(&self.params)?;
        let body = self.build_body()?;
        let text = session
            .client
            .raw(method.clone(), &self.endpoint, &params, body.as_ref())
            .await?;
        session.output.write_body(&text)
    }

    async fn send_enveloped(&self, session: &Session, method: &Method, key: &str) -> Result<()> {
        let client = &session.client;
        let output: &OutputWriter = &session.output;
        let fields = match self.build_body()? {
            None => Default::default(),
            Some(Value::Object(fields)) => fields,
            Some(_) => bail!("Body must be a JSON object when --envelope is used"),
        };

        match method.as_str() {
            "GET" => {
                let params = parse_params(&self.params)?;
                let unwrapped = client.get(&self.endpoint, key, &params).await?;
                write_unwrapped(output, unwrapped)
            }
            "POST" => {
                let unwrapped = client.post(&self.endpoint, key, &fields).await?;
                write_unwrapped(output, unwrapped)
            }
            "PUT" => {
                let text = client.put(&self.endpoint, key, &fields).await?;
                output.write_body(&text)
            }
            "DELETE" => {
                let text = client.delete(&self.endpoint).await?;
                output.write_body(&text)
            }
            _ => bail!("--envelope supports GET, POST, PUT and DELETE only"),
        }
    }
}

/// One record as a field table or JSON; lists always as JSON since their columns are unknown.
fn write_unwrapped(output: &OutputWriter, unwrapped: Unwrapped) -> Result<()> {
    match unwrapped {
        Unwrapped::One(record) => output.write_record(&record),
        Unwrapped::Many(records) => write_json(&records),
    }
}

fn print_status(client: &FreshdeskClient) {
    if let Some(last) = client.last_response() {
        eprintln!(
            "{} {} {}",
            style(&last.method).bold(),
            last.url,
            style(last.status).cyan()
        );
    }
}
