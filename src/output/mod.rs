//
//  freshdesk-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the Freshdesk CLI. Records coming back from the API
//! are untyped JSON objects, so rendering works on [`Record`] directly:
//!
//! - **Table format**: Human-readable tables for interactive terminal use
//! - **JSON format**: The records exactly as the API returned them
//!
//! ## Architecture
//!
//! - [`table`]: Table formatting utilities using `comfy_table`
//! - [`json`]: JSON serialization utilities using `serde_json`
//!
//! ## Example
//!
//! ```rust,ignore
//! use freshdesk_cli::output::{OutputWriter, OutputFormat};
//!
//! let writer = OutputWriter::new(OutputFormat::Table);
//! writer.write_records(&contacts, &["id", "name", "email"])?;
//! writer.write_success("Contact created");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use std::str::FromStr;

use crate::api::Record;

/// Represents the available output formats for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table format with optional color support.
    #[default]
    Table,
    /// Pretty-printed JSON for scripting and automation.
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format '{}'", other),
        }
    }
}

/// A unified output writer that handles both output formats.
///
/// Color output is detected from the terminal and disabled when output is
/// piped or redirected.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes a list of records; table mode shows only `columns`.
    pub fn write_records(&self, records: &[Record], columns: &[&str]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&records)?,
            OutputFormat::Table => {
                if records.is_empty() {
                    self.write_info("No results");
                } else {
                    records_table(records, columns, self.color).print();
                }
            }
        }
        Ok(())
    }

    /// Writes one record; table mode shows every field as a key/value row.
    pub fn write_record(&self, record: &Record) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(record)?,
            OutputFormat::Table => record_table(record, self.color).print(),
        }
        Ok(())
    }

    /// Writes a raw response body, pretty-printing it in JSON mode when it parses.
    pub fn write_body(&self, body: &str) -> anyhow::Result<()> {
        match (self.format, serde_json::from_str::<serde_json::Value>(body)) {
            (OutputFormat::Json, Ok(value)) => write_json(&value)?,
            _ if body.trim().is_empty() => {}
            _ => println!("{}", body),
        }
        Ok(())
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Status line for a finished mutation. Suppressed in JSON mode so stdout stays parseable.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        match (self.format, self.color) {
            (OutputFormat::Json, _) => {}
            (OutputFormat::Table, true) => println!("{} {}", style("✓").green().bold(), msg),
            (OutputFormat::Table, false) => println!("✓ {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("markdown".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }
}
