#![forbid(unsafe_code)]

//! Tab-separated table output formatter

use crate::template::Template;

/// Renders a template as one line per field
///
/// Pretty lines are `name<TAB>token`; bare lines hold the token alone.
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        TableFormatter
    }

    pub fn format(&self, template: &Template, pretty: bool) -> String {
        let lines: Vec<String> = template
            .fields()
            .iter()
            .map(|(field, token)| {
                if pretty {
                    format!("{}\t{}", field, token)
                } else {
                    token.clone()
                }
            })
            .collect();

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}

impl Default for TableFormatter {
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
            TableFormatter::new().format(&template, true),
            "url_effective\t%{url_effective}\ntime_namelookup\t%{time_namelookup}\ntime_connect\t%{time_connect}\n"
        );
    }

    #[test]
    fn test_format_bare() {
        let template = Template::parse(TEST_TEMPLATE);

        assert_eq!(
            TableFormatter::new().format(&template, false),
            "%{url_effective}\n%{time_namelookup}\n%{time_connect}\n"
        );
    }

    #[test]
    fn test_format_single_field() {
        let template = Template::parse("%{http_code}");

        assert_eq!(
            TableFormatter::new().format(&template, true),
            "http_code\t%{http_code}\n"
        );
    }

    #[test]
    fn test_format_empty() {
        let template = Template::default();
        assert_eq!(TableFormatter::new().format(&template, true), "\n");
        assert_eq!(TableFormatter::new().format(&template, false), "\n");
    }
}
