#![forbid(unsafe_code)]

//! Profile discovery under the curl home directory
//!
//! The curl home is resolved once at startup (`CURL_HOME`, falling back to
//! `~/.curl`) and passed explicitly to [`curl_configs`].

use globset::Glob;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extension of curl profile files
pub const CURLRC_EXTENSION: &str = ".rc";

/// Glob matched against file names when no pattern is given
pub const DEFAULT_PATTERN: &str = "*.rc";

/// Environment variable naming the profile directory
pub const CURL_HOME_ENV: &str = "CURL_HOME";

const DEFAULT_CURL_HOME_DIR: &str = ".curl";

/// Errors that can occur while enumerating profiles
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The file name pattern is not a valid glob
    #[error("invalid profile pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// The directory exists but could not be listed
    #[error("cannot list profiles in '{}': {source}", .dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolves the curl home from an environment value and a home directory
///
/// A non-blank `env_value` wins; otherwise `<home>/.curl`, or `./.curl`
/// when no home directory is known.
pub fn resolve_curl_home(env_value: Option<String>, home: Option<PathBuf>) -> PathBuf {
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return PathBuf::from(value);
    }
    match home {
        Some(home) => home.join(DEFAULT_CURL_HOME_DIR),
        None => PathBuf::from(DEFAULT_CURL_HOME_DIR),
    }
}

/// Reads `CURL_HOME` and `HOME` from the process environment
pub fn curl_home_from_env() -> PathBuf {
    resolve_curl_home(
        std::env::var(CURL_HOME_ENV).ok(),
        std::env::var("HOME").ok().map(PathBuf::from),
    )
}

/// Lists profile files directly inside `dir` whose name matches `pattern`
///
/// Hidden files (names starting with `.`) are never profiles, so `.rc` does
/// not produce a command with an empty name. Results are sorted by path. A
/// missing directory has no profiles.
///
/// # Errors
///
/// Returns an error if the pattern is not a valid glob or the directory
/// cannot be listed.
pub fn curl_configs(dir: &Path, pattern: Option<&str>) -> Result<Vec<PathBuf>, DiscoveryError> {
    let pattern = pattern.unwrap_or(DEFAULT_PATTERN);
    let matcher = Glob::new(pattern)
        .map_err(|source| DiscoveryError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?
        .compile_matcher();

    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "Curl home does not exist, no profiles");
        return Ok(Vec::new());
    }

    let read_dir_error = |source: std::io::Error| DiscoveryError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let file_name = entry.file_name();
        if file_name.to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if matcher.is_match(&file_name) {
            paths.push(path);
        }
    }

    paths.sort();
    tracing::debug!(dir = %dir.display(), count = paths.len(), "Discovered curl profiles");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn test_curl_configs_default_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let first = touch(&temp_dir, "example1.rc");
        let second = touch(&temp_dir, "example2.rc");
        touch(&temp_dir, "example3");

        let found = curl_configs(temp_dir.path(), None).unwrap();
        assert_eq!(found, vec![first, second]);
    }

    #[test]
    fn test_curl_configs_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let zeta = touch(&temp_dir, "zeta.rc");
        let alpha = touch(&temp_dir, "alpha.rc");

        let found = curl_configs(temp_dir.path(), None).unwrap();
        assert_eq!(found, vec![alpha, zeta]);
    }

    #[test]
    fn test_curl_configs_custom_pattern() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir, "api-get.rc");
        let post = touch(&temp_dir, "api-post.rc");
        touch(&temp_dir, "other.rc");

        let found = curl_configs(temp_dir.path(), Some("*-post.rc")).unwrap();
        assert_eq!(found, vec![post]);
    }

    #[test]
    fn test_curl_configs_skips_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("nested.rc")).unwrap();
        let file = touch(&temp_dir, "real.rc");

        let found = curl_configs(temp_dir.path(), None).unwrap();
        assert_eq!(found, vec![file]);
    }

    #[test]
    fn test_curl_configs_skips_hidden_files() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir, ".rc");
        touch(&temp_dir, ".hidden.rc");
        let time = touch(&temp_dir, "time.rc");

        let found = curl_configs(temp_dir.path(), None).unwrap();
        assert_eq!(found, vec![time]);

        let found = curl_configs(temp_dir.path(), Some("*")).unwrap();
        assert_eq!(found, vec![temp_dir.path().join("time.rc")]);
    }

    #[test]
    fn test_curl_configs_missing_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let found = curl_configs(&missing, None).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_curl_configs_invalid_pattern() {
        let temp_dir = TempDir::new().unwrap();

        let err = curl_configs(temp_dir.path(), Some("[unclosed")).unwrap_err();
        assert!(matches!(err, DiscoveryError::Pattern { .. }));
    }

    #[test]
    fn test_resolve_curl_home_env_wins() {
        let home = resolve_curl_home(Some("/srv/curl".into()), Some(PathBuf::from("/home/u")));
        assert_eq!(home, PathBuf::from("/srv/curl"));
    }

    #[test]
    fn test_resolve_curl_home_blank_env_falls_back() {
        let home = resolve_curl_home(Some("  ".into()), Some(PathBuf::from("/home/u")));
        assert_eq!(home, PathBuf::from("/home/u/.curl"));
    }

    #[test]
    fn test_resolve_curl_home_without_home() {
        assert_eq!(resolve_curl_home(None, None), PathBuf::from(".curl"));
    }
}
