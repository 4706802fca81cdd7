#![forbid(unsafe_code)]

use curlrc::cli::{self, CliError, ColorChoice, LoadedProfiles, Selection};
use curlrc::config::curl_home_from_env;
use std::io::{IsTerminal, Write};
use std::path::Path;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};
use tracing_subscriber::EnvFilter;

/// Exit codes for curlrc itself; curl's own status replaces ours on success
const EXIT_ERROR: i32 = 1;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let home = curl_home_from_env();
    let profiles = match cli::load_profiles(&home, None) {
        Ok(profiles) => profiles,
        Err(e) => {
            init_logging(0, false);
            let _ = report_error(&CliError::from(e), ColorChoice::Auto);
            return EXIT_ERROR;
        }
    };

    let selection = match cli::parse_selection(&profiles.configs, std::env::args_os()) {
        Ok(selection) => selection,
        Err(e) => {
            // --help and usage errors still mention profiles missing from the list
            init_logging(0, false);
            log_discovery(&home, &profiles);
            e.exit()
        }
    };

    init_logging(selection.cli.verbose, selection.cli.quiet);
    log_discovery(&home, &profiles);

    let color = selection.cli.color;
    match delegate(selection) {
        Ok(never) => match never {},
        Err(e) => {
            let _ = report_error(&e, color);
            EXIT_ERROR
        }
    }
}

fn log_discovery(home: &Path, profiles: &LoadedProfiles) {
    tracing::debug!(
        home = %home.display(),
        profiles = profiles.configs.len(),
        "Discovered curl profiles"
    );
    for skipped in &profiles.skipped {
        tracing::warn!("Skipping profile: {}", skipped);
    }
}

/// Plans the curl call for the selected profile and execs it
fn delegate(selection: Selection) -> Result<std::convert::Infallible, CliError> {
    let pretty = selection.args.is_pretty();
    let invocation = cli::plan_invocation(
        &selection.config,
        selection.args.format,
        pretty,
        selection.args.curl_args,
    )?;
    Ok(cli::exec_curl(&invocation)?)
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("curlrc={}", level)));

    // stdout belongs to curl
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_error(error: &CliError, color: ColorChoice) -> std::io::Result<()> {
    let mut stderr = StandardStream::stderr(color.to_termcolor(std::io::stderr().is_terminal()));
    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stderr, "error:")?;
    stderr.reset()?;
    writeln!(stderr, " {}", error)
}
