#![forbid(unsafe_code)]

//! Structured renderings of a write-out template
//!
//! Each formatter turns the template's placeholders into a new write-out
//! string. Curl substitutes the placeholders when the request completes, so
//! the result is CSV, JSON or a tab-separated table of response variables.

pub mod csv;
pub mod json;
pub mod table;

pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;

use crate::config::ConfigError;
use crate::template::Template;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while rendering a template
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to serialize template as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Output encodings a template can be rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated values
    Csv,
    /// JSON object
    Json,
    /// Tab-separated table
    Table,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
        }
    }

    /// Renders the template in this format
    ///
    /// Pretty output labels each value with its field name (and indents
    /// JSON); bare output contains the placeholders only.
    pub fn render(&self, template: &Template, pretty: bool) -> Result<String, OutputError> {
        let output = match self {
            OutputFormat::Csv => CsvFormatter::new().format(template, pretty),
            OutputFormat::Json => JsonFormatter::new().format(template, pretty)?,
            OutputFormat::Table => TableFormatter::new().format(template, pretty),
        };
        tracing::debug!(
            format = self.as_str(),
            pretty,
            fields = template.fields().len(),
            "Rendered template"
        );
        Ok(output)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            other => Err(ConfigError::InvalidFormat(other.to_string())),
        }
    }
}
