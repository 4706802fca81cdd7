#![forbid(unsafe_code)]

//! Parser for curl configuration files (`*.rc`)
//!
//! A profile file is plain text. An optional first line starting with `#`
//! carries a human-readable description. Every other non-comment line is a
//! curl option, split once on a space, `=` or `:` delimiter:
//!
//! ```text
//! # output timing data
//! -s
//! -o = /dev/null
//! -w = "time_total: %{time_total}\n"
//! ```

use super::discovery::CURLRC_EXTENSION;
use crate::types::{OptionValue, OrderedMap};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Marker that starts a comment line
const COMMENT_MARKER: char = '#';

/// Option keys that carry the write-out template, in lookup order
///
/// Curl accepts long option names without leading dashes in config files.
const TEMPLATE_KEYS: [&str; 3] = ["-w", "--write-out", "write-out"];

/// One delimiter from {whitespace, `=`, `:`}, optionally padded by a single
/// whitespace character on either side
static OPTION_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s?[\s=:]\s?").expect("option separator pattern is valid"));

/// Errors that can occur when loading or interpreting a profile
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The profile file is missing or unreadable
    #[error("cannot read curl configuration '{}': {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value did not match the accepted vocabulary
    #[error("invalid format '{0}' (expected one of: csv, json, table)")]
    InvalidFormat(String),
}

/// A curl configuration profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurlConfig {
    name: String,
    path: Option<PathBuf>,
    description: Option<String>,
    options: OrderedMap<OptionValue>,
}

impl CurlConfig {
    /// Creates an empty profile with the given name and no backing file
    pub fn new(name: impl Into<String>) -> Self {
        CurlConfig {
            name: name.into(),
            path: None,
            description: None,
            options: OrderedMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: OptionValue) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Loads a profile from a file
    ///
    /// The profile name is the file name with one trailing `.rc` removed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist or cannot
    /// be read. The line splitter is total, so content never fails to parse.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(profile_name(path), Some(path.to_path_buf()), &content);
        tracing::debug!(
            name = %config.name,
            path = %path.display(),
            options = config.options.len(),
            "Loaded curl configuration"
        );
        Ok(config)
    }

    /// Parses profile content that has already been read into memory
    pub fn parse(name: impl Into<String>, path: Option<PathBuf>, content: &str) -> Self {
        let mut lines = content.lines();
        let mut description = None;
        let mut options = OrderedMap::new();

        if let Some(first_line) = lines.next() {
            let first_line = first_line.trim();
            match first_line.split_once(COMMENT_MARKER) {
                Some((before, after)) if before.is_empty() => {
                    description = Some(after.trim().to_string());
                }
                _ => insert_option_line(&mut options, first_line),
            }
        }

        for line in lines {
            insert_option_line(&mut options, line.trim());
        }

        CurlConfig {
            name: name.into(),
            path,
            description,
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn options(&self) -> &OrderedMap<OptionValue> {
        &self.options
    }

    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// The write-out template, if the profile sets one
    ///
    /// A template option given as a bare flag has no template text.
    pub fn template(&self) -> Option<&str> {
        TEMPLATE_KEYS
            .iter()
            .find_map(|key| self.options.get(key))
            .and_then(OptionValue::as_str)
    }
}

/// Derives the profile name from a path, stripping one trailing `.rc`
fn profile_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match file_name.strip_suffix(CURLRC_EXTENSION) {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}

/// Parses a trimmed line into `options`, ignoring blanks and comments
fn insert_option_line(options: &mut OrderedMap<OptionValue>, line: &str) {
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return;
    }
    let (key, value) = split_line(line);
    options.insert(key, value);
}

/// Splits a curl option line into a key and a value
///
/// The line is split at most once, so the value keeps any further
/// delimiters and its quotes verbatim. A line with no delimiter is a flag.
pub fn split_line(line: &str) -> (String, OptionValue) {
    let mut parts = OPTION_SEPARATOR.splitn(line, 2);
    let key = parts.next().unwrap_or_default().to_string();
    match parts.next() {
        Some(value) => (key, OptionValue::Value(value.to_string())),
        None => (key, OptionValue::Flag),
    }
}
