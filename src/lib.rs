#![forbid(unsafe_code)]

//! curlrc: treat curl configuration files as commands
//!
//! Each `*.rc` file in the curl home is a profile of curl options. Profiles
//! become subcommands, and a profile's write-out template can be re-rendered
//! as CSV, JSON or a table before curl is executed.

pub mod cli;
pub mod config;
pub mod output;
pub mod template;
pub mod types;
