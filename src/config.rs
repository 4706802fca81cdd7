//! Curl configuration profiles: parsing and discovery

pub mod curlrc;
pub mod discovery;

pub use curlrc::{ConfigError, CurlConfig, split_line};
pub use discovery::{
    CURLRC_EXTENSION, DEFAULT_PATTERN, DiscoveryError, curl_configs, curl_home_from_env,
    resolve_curl_home,
};
