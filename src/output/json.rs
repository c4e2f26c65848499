//
//  freshdesk-cli
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! Pretty JSON writers. Field order follows the API response
//! since records keep insertion order.

use serde::Serialize;
use std::io::Write;

pub fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    write_json_to(&mut std::io::stdout().lock(), value)
}

/// Writes pretty JSON followed by a newline to `writer`.
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_json_to_keeps_field_order() {
        let value = json!({"name": "Jane", "email": "jane@example.com", "id": 7});
        let mut out = Vec::new();
        write_json_to(&mut out, &value).unwrap();

        let text = String::from_utf8(out).unwrap();
        let name = text.find("\"name\"").unwrap();
        let email = text.find("\"email\"").unwrap();
        let id = text.find("\"id\"").unwrap();
        assert!(name < email && email < id);
        assert!(text.ends_with("}\n"));
    }
}
