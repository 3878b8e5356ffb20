//! Point cloud extent command
//!
//! Reads a text file of "x y [z]" lines (commas also accepted, `#` starts a
//! comment) and reports the extent of the points.

use std::fs;

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::emit_bbox;
use crate::config::ExtentConfig;
use crate::coordinate::{bounding_of_points, Point, SpatialReference};
use crate::errors::{ExtentError, ExtentResult};

/// Command computing the extent of a point file
pub struct PointsCommand<'a> {
    input: String,
    output: Option<String>,
    srs: Option<SpatialReference>,
    config: &'a ExtentConfig,
}

impl<'a> PointsCommand<'a> {
    /// Create a new points command
    pub fn new(args: &ArgMatches, config: &'a ExtentConfig) -> ExtentResult<Self> {
        let input = args.get_one::<String>("input")
            .ok_or_else(|| ExtentError::GenericError("Missing point file".to_string()))?
            .clone();
        let output = args.get_one::<String>("output").cloned();

        let srs = match args.get_one::<String>("srs") {
            Some(s) => Some(SpatialReference::parse(s)?),
            None => config.default_srs()?,
        };

        Ok(PointsCommand { input, output, srs, config })
    }
}

/// Parse the point lines of a file
pub(crate) fn parse_points(content: &str) -> ExtentResult<Vec<Point>> {
    content.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line.split('#').next().unwrap_or("").trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| {
            Point::parse_line(line).ok_or_else(|| {
                ExtentError::GenericError(format!("Invalid point on line {}: {}", number, line))
            })
        })
        .collect()
}

impl<'a> Command for PointsCommand<'a> {
    fn execute(&self) -> ExtentResult<()> {
        let content = fs::read_to_string(&self.input)?;
        let points = parse_points(&content)?;
        info!("Read {} points from {}", points.len(), self.input);

        let bbox = bounding_of_points(points, self.srs.clone())?;
        emit_bbox(&bbox, self.output.as_deref(), self.config)
    }
}
