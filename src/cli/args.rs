#![forbid(unsafe_code)]

//! Command-line argument definitions
//!
//! Subcommands are not known at compile time: one is generated per profile
//! found in the curl home (see [`crate::cli::app`]). The derive structs here
//! describe the global options and the options shared by every profile.

use crate::config::ConfigError;
use crate::output::OutputFormat;
use clap::{Args, Parser, ValueEnum};

/// Treat curl configuration files as commands
#[derive(Parser, Debug, Clone)]
#[command(
    name = "curlrc",
    version,
    about = "Treat curl configuration files as commands",
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// When to colorize error messages
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,
}

// Flattened into each profile subcommand. Keep this without a doc comment:
// the derive would install it as the subcommand's `about`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ProfileArgs {
    /// Output format: csv, json or table
    #[arg(short, long, value_name = "FORMAT", value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Pretty-print output [default]
    #[arg(long)]
    pub pretty: bool,

    /// Do not pretty-print output
    #[arg(long = "no-pretty", conflicts_with = "pretty")]
    pub no_pretty: bool,

    /// Arguments passed to curl
    #[arg(value_name = "CURL ARGS", num_args = 0.., trailing_var_arg = true)]
    pub curl_args: Vec<String>,
}

fn parse_format(value: &str) -> Result<OutputFormat, ConfigError> {
    value.parse()
}

impl ProfileArgs {
    /// Whether output should be pretty-printed; on unless `--no-pretty`
    pub fn is_pretty(&self) -> bool {
        !self.no_pretty
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves the choice against whether the target stream is a terminal
    pub fn to_termcolor(self, is_terminal: bool) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Auto if is_terminal => termcolor::ColorChoice::Auto,
            ColorChoice::Auto => termcolor::ColorChoice::Never,
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}
