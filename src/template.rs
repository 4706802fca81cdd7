#![forbid(unsafe_code)]

//! Write-out template decoding
//!
//! Curl write-out templates reference response variables as `%{name}`.
//! A [`Template`] keeps the distinct placeholders in the order they first
//! appear so they can be re-rendered in a structured layout.

use crate::output::{OutputError, OutputFormat};
use crate::types::OrderedMap;
use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%\{(\w+)\}").expect("placeholder pattern is valid"));

/// The placeholders of a write-out template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    fields: OrderedMap<String>,
}

impl Template {
    /// Extracts `%{name}` placeholders from a template string
    ///
    /// Matches are collected left to right; a repeated name keeps the
    /// position of its first occurrence. Text without placeholders yields an
    /// empty template.
    pub fn parse(template: &str) -> Self {
        let mut fields = OrderedMap::new();
        for capture in PLACEHOLDER.captures_iter(template) {
            let token = &capture[0];
            let name = &capture[1];
            fields.insert(name, token.to_string());
        }
        Template { fields }
    }

    /// Field name to placeholder token, in first-seen order
    pub fn fields(&self) -> &OrderedMap<String> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders the placeholders in the given output format
    ///
    /// # Errors
    ///
    /// Returns an error only if JSON serialization fails.
    pub fn render(&self, format: OutputFormat, pretty: bool) -> Result<String, OutputError> {
        format.render(self, pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TEMPLATE: &str = "url_effective: %{url_effective}\ntime_namelookup: %{time_namelookup}\ntime_connect: %{time_connect}";

    #[test]
    fn test_parse_fields_in_order() {
        let template = Template::parse(TEST_TEMPLATE);

        let entries: Vec<(&str, &String)> = template.fields().iter().collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], ("url_effective", &"%{url_effective}".to_string()));
        assert_eq!(entries[1], ("time_namelookup", &"%{time_namelookup}".to_string()));
        assert_eq!(entries[2], ("time_connect", &"%{time_connect}".to_string()));
    }

    #[test]
    fn test_parse_duplicates_collapse_to_first_position() {
        let template = Template::parse("%{b} %{a} %{b} %{c} %{a}");

        let names: Vec<&str> = template.fields().keys().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_parse_no_placeholders() {
        assert!(Template::parse("").is_empty());
        assert!(Template::parse("plain text, no variables\n").is_empty());
    }

    #[test]
    fn test_parse_ignores_malformed_tokens() {
        let template = Template::parse("%{} %{with space} {x} %y %{ok_1}");

        let names: Vec<&str> = template.fields().keys().collect();
        assert_eq!(names, vec!["ok_1"]);
    }

    #[test]
    fn test_parse_adjacent_tokens() {
        let template = Template::parse("%{a}%{b},%{c}");

        let tokens: Vec<&String> = template.fields().values().collect();
        assert_eq!(tokens, vec!["%{a}", "%{b}", "%{c}"]);
    }

    #[test]
    fn test_render_delegates_to_format() {
        let template = Template::parse("%{a} %{b}");

        assert_eq!(
            template.render(OutputFormat::Csv, true).unwrap(),
            "a,b\n%{a},%{b}\n"
        );
    }
}
