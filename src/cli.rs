//! CLI argument parsing, profile subcommands and delegation to curl

pub mod app;
pub mod args;
pub mod exec;

// Re-export types for convenient access
pub use app::{LoadedProfiles, Selection, build_command, load_profiles, parse_selection};
pub use args::{Cli, ColorChoice, ProfileArgs};
pub use exec::{CURL_PROGRAM, ExecError, Invocation, exec_curl, plan_invocation};

use crate::config::DiscoveryError;
use crate::output::OutputError;
use thiserror::Error;

/// Any failure surfaced to the user by the `curlrc` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Exec(#[from] ExecError),
}
