#![forbid(unsafe_code)]

//! Delegation to the external curl binary
//!
//! The selected profile is passed to curl with `-K`. When an output format
//! was requested and the profile has a write-out template, the rendered
//! template is passed with `-w`, which overrides the one in the profile.

use super::CliError;
use crate::config::CurlConfig;
use crate::output::OutputFormat;
use crate::template::Template;
use std::convert::Infallible;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;

/// Program the profiles are handed to, looked up on `PATH`
pub const CURL_PROGRAM: &str = "curl";

/// Errors that can occur when handing off to curl
#[derive(Debug, Error)]
pub enum ExecError {
    /// The profile has no file to pass with `-K`
    #[error("profile '{name}' has no configuration file")]
    MissingPath { name: String },

    /// The program could not be started
    #[error("failed to execute '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// A planned curl invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    config_path: PathBuf,
    write_out: Option<String>,
    curl_args: Vec<String>,
}

impl Invocation {
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The rendered template override, if any
    pub fn write_out(&self) -> Option<&str> {
        self.write_out.as_deref()
    }

    /// Arguments for curl: `-K <config> [-w <template>] [curl args...]`
    pub fn args(&self) -> Vec<OsString> {
        let mut args = vec![OsString::from("-K"), self.config_path.clone().into_os_string()];
        if let Some(write_out) = &self.write_out {
            args.push(OsString::from("-w"));
            args.push(OsString::from(write_out));
        }
        args.extend(self.curl_args.iter().map(OsString::from));
        args
    }
}

/// Plans the curl call for a profile
///
/// The template is only re-rendered when `format` is given and the profile
/// defines one; otherwise curl uses the profile's own write-out setting.
///
/// # Errors
///
/// Returns an error if the profile has no backing file or the template
/// cannot be rendered.
pub fn plan_invocation(
    config: &CurlConfig,
    format: Option<OutputFormat>,
    pretty: bool,
    curl_args: Vec<String>,
) -> Result<Invocation, CliError> {
    let config_path = config
        .path()
        .ok_or_else(|| ExecError::MissingPath {
            name: config.name().to_string(),
        })?
        .to_path_buf();

    let write_out = match (format, config.template()) {
        (Some(format), Some(template)) => Some(Template::parse(template).render(format, pretty)?),
        (Some(format), None) => {
            tracing::warn!(
                profile = config.name(),
                %format,
                "Profile has no write-out template, ignoring output format"
            );
            None
        }
        (None, _) => None,
    };

    Ok(Invocation {
        program: CURL_PROGRAM.to_string(),
        config_path,
        write_out,
        curl_args,
    })
}

/// Replaces the current process with curl
///
/// Only returns if curl could not be executed.
#[cfg(unix)]
pub fn exec_curl(invocation: &Invocation) -> Result<Infallible, ExecError> {
    use std::os::unix::process::CommandExt;

    tracing::debug!(program = invocation.program(), args = ?invocation.args(), "Executing");
    let source = Command::new(invocation.program()).args(invocation.args()).exec();
    Err(ExecError::Spawn {
        program: invocation.program().to_string(),
        source,
    })
}

/// Runs curl as a child process and exits with its status
#[cfg(not(unix))]
pub fn exec_curl(invocation: &Invocation) -> Result<Infallible, ExecError> {
    tracing::debug!(program = invocation.program(), args = ?invocation.args(), "Executing");
    let status = Command::new(invocation.program())
        .args(invocation.args())
        .status()
        .map_err(|source| ExecError::Spawn {
            program: invocation.program().to_string(),
            source,
        })?;
    std::process::exit(status.code().unwrap_or(1));
}
