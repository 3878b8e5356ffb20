//! Helpers for command tests

extern crate std;

use std::env;

use clap::ArgMatches;

use crate::commands::cli;
use crate::coordinate::Bbox;
use crate::io::save_bbox;

/// Unique path in the temporary directory
pub fn temp_path(name: &str) -> String {
    env::temp_dir()
        .join(format!("extentkit-cmd-{}-{}", std::process::id(), name))
        .to_string_lossy()
        .into_owned()
}

/// Save `bbox` as a record and return its path
pub fn write_record(name: &str, bbox: Bbox) -> String {
    let path = temp_path(name);
    save_bbox(&bbox, &path).unwrap();
    path
}

/// Parse a full command line with the tool's definition
pub fn matches(args: &[&str]) -> ArgMatches {
    cli().try_get_matches_from(args).unwrap()
}
