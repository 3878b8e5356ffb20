//! CLI command implementations
//!
//! Each subcommand of the tool is a `Command`; the factory picks the one
//! matching the parsed arguments.

pub mod cli;
pub mod command_traits;
pub mod aggregate_command;
pub mod pad_command;
pub mod points_command;
pub mod overlaps_command;
#[cfg(test)]
mod test_utils;

pub use cli::cli;
pub use command_traits::{Command, CommandFactory};
pub use aggregate_command::{AggregateCommand, AggregateMode};
pub use pad_command::PadCommand;
pub use points_command::PointsCommand;
pub use overlaps_command::OverlapsCommand;

use clap::ArgMatches;
use log::debug;

use crate::config::ExtentConfig;
use crate::coordinate::Bbox;
use crate::errors::{ExtentError, ExtentResult};
use crate::io::{load_bbox, save_bbox};

/// Factory for creating command instances based on CLI arguments
pub struct ExtentkitCommandFactory;

impl ExtentkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ExtentkitCommandFactory
    }
}

impl Default for ExtentkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for ExtentkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &'a ExtentConfig) -> ExtentResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("intersect", sub)) => Ok(Box::new(AggregateCommand::new(sub, config, AggregateMode::Intersection)?)),
            Some(("union", sub)) => Ok(Box::new(AggregateCommand::new(sub, config, AggregateMode::Union)?)),
            Some(("pad", sub)) => Ok(Box::new(PadCommand::new(sub, config)?)),
            Some(("points", sub)) => Ok(Box::new(PointsCommand::new(sub, config)?)),
            Some(("overlaps", sub)) => Ok(Box::new(OverlapsCommand::new(sub, config)?)),
            Some((name, _)) => Err(ExtentError::GenericError(format!("Unknown command: {}", name))),
            None => Err(ExtentError::GenericError("Missing command".to_string())),
        }
    }
}

/// Collect the values of a multi-valued string argument
pub(crate) fn string_values(args: &ArgMatches, id: &str) -> Vec<String> {
    args.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Load bbox records, tagging untagged ones with the configured default reference
pub(crate) fn load_inputs(paths: &[String], config: &ExtentConfig) -> ExtentResult<Vec<Bbox>> {
    let default_srs = config.default_srs()?;

    paths.iter()
        .map(|path| {
            let bbox = load_bbox(path)?;
            if bbox.srs().is_none() && default_srs.is_some() {
                return Ok(bbox.with_srs(default_srs.clone()));
            }
            Ok(bbox)
        })
        .collect()
}

/// Save a result to `output` if given, print it otherwise
pub(crate) fn emit_bbox(bbox: &Bbox, output: Option<&str>, config: &ExtentConfig) -> ExtentResult<()> {
    match output {
        Some(path) => save_bbox(bbox, path),
        None => {
            debug!("Printing result bbox");
            println!("{:.*}", config.output_precision, bbox);
            Ok(())
        },
    }
}
