#![forbid(unsafe_code)]

//! Dynamic command construction
//!
//! Every profile in the curl home becomes a subcommand named after the
//! profile, with the profile's description as its help text.

use super::args::{Cli, ProfileArgs};
use crate::config::{ConfigError, CurlConfig, DiscoveryError, curl_configs};
use clap::{Args, Command, CommandFactory, FromArgMatches};
use std::ffi::OsString;
use std::path::Path;

/// Profiles discovered in the curl home
#[derive(Debug, Default)]
pub struct LoadedProfiles {
    /// Successfully parsed profiles, in discovery order
    pub configs: Vec<CurlConfig>,
    /// Files that matched the pattern but could not be read
    pub skipped: Vec<ConfigError>,
}

/// A parsed command line: global options plus the chosen profile
#[derive(Debug, Clone)]
pub struct Selection {
    pub cli: Cli,
    pub config: CurlConfig,
    pub args: ProfileArgs,
}

/// Discovers and loads every profile under `home`
///
/// Unreadable profiles are collected in [`LoadedProfiles::skipped`] rather
/// than failing the whole command.
///
/// # Errors
///
/// Returns an error if the curl home cannot be listed.
pub fn load_profiles(
    home: &Path,
    pattern: Option<&str>,
) -> Result<LoadedProfiles, DiscoveryError> {
    let mut profiles = LoadedProfiles::default();
    for path in curl_configs(home, pattern)? {
        match CurlConfig::from_file(&path) {
            Ok(config) => profiles.configs.push(config),
            Err(e) => profiles.skipped.push(e),
        }
    }
    Ok(profiles)
}

/// Builds the clap command with one subcommand per profile
pub fn build_command(profiles: &[CurlConfig]) -> Command {
    let mut command = Cli::command()
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand_help_heading("Commands")
        .override_usage("curlrc COMMAND [OPTION...] -- [CURL ARGS...]");

    for config in profiles {
        // about has to be set after augment_args
        let mut subcommand = ProfileArgs::augment_args(Command::new(config.name().to_string()))
            .override_usage(format!("curlrc {} [OPTION...] -- [CURL ARGS...]", config.name()));
        if let Some(description) = config.description() {
            subcommand = subcommand.about(description.to_string());
        }
        command = command.subcommand(subcommand);
    }

    command
}

/// Parses `argv` against the commands generated for `profiles`
///
/// # Errors
///
/// Returns the clap error for invalid usage, `--help` and `--version`; the
/// caller decides how to print it and which exit code to use.
pub fn parse_selection<I, T>(profiles: &[CurlConfig], argv: I) -> Result<Selection, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = build_command(profiles);
    let matches = command.try_get_matches_from_mut(argv)?;
    let cli = Cli::from_arg_matches(&matches)?;

    let (name, sub_matches) = matches.subcommand().ok_or_else(|| {
        command.error(
            clap::error::ErrorKind::MissingSubcommand,
            "a command is required",
        )
    })?;
    let config = profiles
        .iter()
        .find(|config| config.name() == name)
        .cloned()
        .ok_or_else(|| {
            command.error(
                clap::error::ErrorKind::InvalidSubcommand,
                format!("unknown profile '{}'", name),
            )
        })?;
    let args = ProfileArgs::from_arg_matches(sub_matches)?;

    Ok(Selection { cli, config, args })
}
