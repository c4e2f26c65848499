//
//  freshdesk-cli
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Utilities for rendering records as terminal tables using `comfy_table`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use freshdesk_cli::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["ID", "Name", "Email"])
//!     .row(["1", "Jane Doe", "jane@example.com"])
//!     .print();
//! ```
//!
//! ## Notes
//!
//! Content is dynamically arranged to fit the terminal width.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::Value;

use crate::api::Record;

/// Longest cell rendered before truncation.
pub const MAX_CELL_WIDTH: usize = 60;

pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder for tables with an optional colored header row.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One row per record, one column per entry in `columns`.
pub fn records_table(records: &[Record], columns: &[&str], color: bool) -> TableBuilder {
    let mut builder = TableBuilder::new()
        .color(color)
        .headers(columns.iter().map(|c| c.to_uppercase()));
    for record in records {
        builder = builder.row(
            columns
                .iter()
                .map(|column| truncate(&format_value(record.get(*column)), MAX_CELL_WIDTH)),
        );
    }
    builder
}

/// Two-column field/value table for a single record.
pub fn record_table(record: &Record, color: bool) -> TableBuilder {
    let mut builder = TableBuilder::new().color(color).headers(["FIELD", "VALUE"]);
    for (key, value) in record {
        builder = builder.row([key.clone(), truncate(&format_value(Some(value)), MAX_CELL_WIDTH)]);
    }
    builder
}

/// Cell text for a JSON value. Missing and null render as `-`.
pub fn format_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "Yes".to_string(),
        Some(Value::Bool(false)) => "No".to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Truncates to `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer string", 8), "a lon...");
        assert_eq!(truncate("héllo wörld", 5), "hé...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(None), "-");
        assert_eq!(format_value(Some(&Value::Null)), "-");
        assert_eq!(format_value(Some(&json!("text"))), "text");
        assert_eq!(format_value(Some(&json!(42))), "42");
        assert_eq!(format_value(Some(&json!(false))), "No");
        assert_eq!(format_value(Some(&json!(["a", "b"]))), "[\"a\",\"b\"]");
    }

    #[test]
    fn test_records_table_renders_columns() {
        let record = json!({"id": 1, "name": "Jane", "email": "jane@example.com"});
        let records = vec![record.as_object().unwrap().clone()];
        let rendered = records_table(&records, &["id", "email"], false).build().to_string();

        assert!(rendered.contains("EMAIL"));
        assert!(rendered.contains("jane@example.com"));
        assert!(!rendered.contains("Jane"));
    }
}
