#![forbid(unsafe_code)]

//! JSON output formatter
//!
//! Fields are written as a single object in template order. Pretty output
//! uses serde_json's two-space indentation; bare output is compact.

use super::OutputError;
use crate::template::Template;

/// Renders a template as a JSON object of field name to placeholder
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        JsonFormatter
    }

    pub fn format(&self, template: &Template, pretty: bool) -> Result<String, OutputError> {
        let mut output = if pretty {
            serde_json::to_string_pretty(template.fields())?
        } else {
            serde_json::to_string(template.fields())?
        };
        output.push('\n');
        Ok(output)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
