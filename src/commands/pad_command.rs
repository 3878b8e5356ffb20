//! Padding command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{emit_bbox, load_inputs};
use crate::config::ExtentConfig;
use crate::coordinate::{Bbox, Padding};
use crate::errors::{ExtentError, ExtentResult};

/// How the padding amount is expressed
#[derive(Debug, Clone, Copy, PartialEq)]
enum PadKind {
    Absolute(Padding),
    Ratio(Padding),
    Percent(Padding),
}

/// Command growing or shrinking a single extent
pub struct PadCommand<'a> {
    input: String,
    output: Option<String>,
    kind: PadKind,
    config: &'a ExtentConfig,
}

impl<'a> PadCommand<'a> {
    /// Create a new pad command
    ///
    /// Exactly one of `--absolute`, `--ratio` or `--percent` is expected;
    /// clap enforces this through an argument group.
    pub fn new(args: &ArgMatches, config: &'a ExtentConfig) -> ExtentResult<Self> {
        let input = args.get_one::<String>("input")
            .ok_or_else(|| ExtentError::GenericError("Missing input record".to_string()))?
            .clone();
        let output = args.get_one::<String>("output").cloned();

        let parse = |id: &str| -> ExtentResult<Option<Padding>> {
            args.get_one::<String>(id).map(|v| v.parse::<Padding>()).transpose()
        };

        let kind = if let Some(p) = parse("absolute")? {
            PadKind::Absolute(p)
        } else if let Some(p) = parse("ratio")? {
            PadKind::Ratio(p)
        } else if let Some(p) = parse("percent")? {
            PadKind::Percent(p)
        } else {
            return Err(ExtentError::GenericError(
                "Missing padding amount. Use --absolute, --ratio or --percent".to_string()));
        };

        Ok(PadCommand { input, output, kind, config })
    }
}

impl<'a> PadCommand<'a> {
    /// Load the input and pad it
    pub fn run(&self) -> ExtentResult<Bbox> {
        let boxes = load_inputs(std::slice::from_ref(&self.input), self.config)?;
        let bbox = &boxes[0];
        info!("Padding {} ({:?})", bbox, self.kind);

        match self.kind {
            PadKind::Absolute(p) => bbox.pad_absolute(p),
            PadKind::Ratio(p) => bbox.pad_ratio(p),
            PadKind::Percent(p) => bbox.pad_percent(p),
        }
    }
}

impl<'a> Command for PadCommand<'a> {
    fn execute(&self) -> ExtentResult<()> {
        let padded = self.run()?;
        emit_bbox(&padded, self.output.as_deref(), self.config)
    }
}
