#![forbid(unsafe_code)]

//! CSV output formatter

use crate::template::Template;

/// Renders a template as comma-separated values
///
/// Pretty output starts with a header row of field names.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        CsvFormatter
    }

    pub fn format(&self, template: &Template, pretty: bool) -> String {
        let fields = template.fields();
        let mut output = String::new();

        // No header row when there is nothing to label
        if pretty && !fields.is_empty() {
            output.push_str(&fields.keys().collect::<Vec<_>>().join(","));
            output.push('\n');
        }

        output.push_str(
            &fields
                .values()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(","),
        );
        output.push('\n');
        output
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TEMPLATE: &str = "url_effective: %{url_effective}\ntime_namelookup: %{time_namelookup}\ntime_connect: %{time_connect}";

    #[test]
    fn test_format_pretty() {
        let template = Template::parse(TEST_TEMPLATE);

        assert_eq!(
            CsvFormatter::new().format(&template, true),
            "url_effective,time_namelookup,time_connect\n%{url_effective},%{time_namelookup},%{time_connect}\n"
        );
    }

    #[test]
    fn test_format_bare() {
        let template = Template::parse(TEST_TEMPLATE);

        assert_eq!(
            CsvFormatter::new().format(&template, false),
            "%{url_effective},%{time_namelookup},%{time_connect}\n"
        );
    }

    #[test]
    fn test_format_two_fields() {
        let template = Template::parse("%{a} and %{b}");
        let formatter = CsvFormatter::new();

        assert_eq!(formatter.format(&template, true), "a,b\n%{a},%{b}\n");
        assert_eq!(formatter.format(&template, false), "%{a},%{b}\n");
    }

    #[test]
    fn test_format_empty() {
        let template = Template::parse("no variables");
        let formatter = CsvFormatter::new();

        assert_eq!(formatter.format(&template, true), "\n");
        assert_eq!(formatter.format(&template, false), "\n");
    }
}
