//! Pairwise overlap command
//!
//! Lists every pair of input footprints with a common area, e.g. the
//! candidate stereo pairs among a set of acquisitions.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{load_inputs, string_values};
use crate::config::ExtentConfig;
use crate::coordinate::overlapping_pairs;
use crate::errors::ExtentResult;

/// Command listing overlapping input pairs
pub struct OverlapsCommand<'a> {
    inputs: Vec<String>,
    config: &'a ExtentConfig,
}

impl<'a> OverlapsCommand<'a> {
    /// Create a new overlaps command
    pub fn new(args: &ArgMatches, config: &'a ExtentConfig) -> ExtentResult<Self> {
        Ok(OverlapsCommand {
            inputs: string_values(args, "inputs"),
            config,
        })
    }
}

impl<'a> OverlapsCommand<'a> {
    /// One tab-separated line per overlapping pair: both inputs, the common extent and its area
    pub fn report(&self) -> ExtentResult<Vec<String>> {
        let boxes = load_inputs(&self.inputs, self.config)?;
        let overlaps = overlapping_pairs(&boxes)?;
        info!("Found {} overlapping pairs among {} footprints", overlaps.len(), boxes.len());

        let precision = self.config.output_precision;
        Ok(overlaps.iter()
            .map(|overlap| format!(
                "{}\t{}\t{:.*}\tarea={:.*}",
                self.inputs[overlap.first],
                self.inputs[overlap.second],
                precision, overlap.extent,
                precision, overlap.extent.area(),
            ))
            .collect())
    }
}

impl<'a> Command for OverlapsCommand<'a> {
    fn execute(&self) -> ExtentResult<()> {
        for line in self.report()? {
            println!("{}", line);
        }
        Ok(())
    }
}
