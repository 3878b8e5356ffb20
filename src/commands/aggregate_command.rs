//! Intersection and union commands
//!
//! Combines the extents of several bbox records into their common area or
//! their enclosing extent, optionally padded by the configured margin.

use clap::ArgMatches;
use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::commands::{emit_bbox, load_inputs, string_values};
use crate::config::ExtentConfig;
use crate::coordinate::{intersection, union, Bbox};
use crate::errors::ExtentResult;

/// Which aggregation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateMode {
    /// Common area of all inputs
    Intersection,
    /// Extent enclosing all inputs
    Union,
}

/// Command combining several extents
pub struct AggregateCommand<'a> {
    /// Paths to the input records
    inputs: Vec<String>,
    /// Optional output record path
    output: Option<String>,
    /// Padding of the result, in percent
    pad_percent: f64,
    mode: AggregateMode,
    config: &'a ExtentConfig,
}

impl<'a> AggregateCommand<'a> {
    /// Create a new aggregate command
    ///
    /// # Arguments
    /// * `args` - Subcommand argument matches from clap
    /// * `config` - Tool settings
    /// * `mode` - Aggregation to run
    pub fn new(args: &ArgMatches, config: &'a ExtentConfig, mode: AggregateMode) -> ExtentResult<Self> {
        let inputs = string_values(args, "inputs");
        let output = args.get_one::<String>("output").cloned();
        let pad_percent = args.get_one::<f64>("pad-percent").copied().unwrap_or(config.pad_percent);

        Ok(AggregateCommand {
            inputs,
            output,
            pad_percent,
            mode,
            config,
        })
    }

    /// Run the aggregation, `None` when an intersection is empty
    fn aggregate(&self, boxes: &[Bbox]) -> ExtentResult<Option<Bbox>> {
        match self.mode {
            AggregateMode::Intersection => intersection(boxes),
            AggregateMode::Union => union(boxes).map(Some),
        }
    }
}

impl<'a> AggregateCommand<'a> {
    /// Aggregate the inputs and apply the padding
    ///
    /// # Returns
    /// The resulting extent, or `None` when an intersection is empty
    pub fn run(&self) -> ExtentResult<Option<Bbox>> {
        let boxes = load_inputs(&self.inputs, self.config)?;
        info!("Computing {:?} of {} extents", self.mode, boxes.len());

        let result = match self.aggregate(&boxes)? {
            Some(bbox) => bbox,
            None => return Ok(None),
        };

        if self.pad_percent != 0.0 {
            info!("Padding result by {}%", self.pad_percent);
            return result.pad_percent(self.pad_percent).map(Some);
        }
        Ok(Some(result))
    }
}

impl<'a> Command for AggregateCommand<'a> {
    fn execute(&self) -> ExtentResult<()> {
        match self.run()? {
            Some(result) => emit_bbox(&result, self.output.as_deref(), self.config),
            None => {
                warn!("Inputs share no common area");
                println!("no overlap");
                Ok(())
            },
        }
    }
}
