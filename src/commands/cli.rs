//! Command-line definition
//!
//! Kept in the library so the argument handling can be tested together with
//! the commands it feeds.

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command as ClapCommand};

fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .help("Bbox record files (TOML)")
        .required(true)
        .num_args(1..)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .help("Write the result as a bbox record instead of printing it")
        .value_name("FILE")
}

fn pad_percent_arg() -> Arg {
    Arg::new("pad-percent")
        .long("pad-percent")
        .help("Pad the result by this percentage of its size (negative shrinks)")
        .value_name("PERCENT")
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
}

/// Padding amount given as "V" or "X,Y"; values may be negative
fn amount_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name("X[,Y]")
        .help(help)
        .allow_hyphen_values(true)
}

/// Command-line definition of the tool
pub fn cli() -> ClapCommand {
    ClapCommand::new("extentkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bounding box algebra for stereo photogrammetry pipelines")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file (TOML)")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file")
                .value_name("FILE")
                .global(true),
        )
        .subcommand(
            ClapCommand::new("intersect")
                .about("Common area of all inputs")
                .arg(inputs_arg())
                .arg(output_arg())
                .arg(pad_percent_arg()),
        )
        .subcommand(
            ClapCommand::new("union")
                .about("Extent enclosing all inputs")
                .arg(inputs_arg())
                .arg(output_arg())
                .arg(pad_percent_arg()),
        )
        .subcommand(
            ClapCommand::new("pad")
                .about("Grow or shrink an extent")
                .arg(Arg::new("input").help("Bbox record file").required(true).index(1))
                .arg(output_arg())
                .arg(amount_arg("absolute", "Padding in coordinate units"))
                .arg(amount_arg("ratio", "Padding as a fraction of the extent size"))
                .arg(amount_arg("percent", "Padding as a percentage of the extent size"))
                .group(
                    ArgGroup::new("amount")
                        .args(["absolute", "ratio", "percent"])
                        .required(true),
                ),
        )
        .subcommand(
            ClapCommand::new("points")
                .about("Extent of a point file with one 'x y [z]' per line")
                .arg(Arg::new("input").help("Point file").required(true).index(1))
                .arg(output_arg())
                .arg(Arg::new("srs").long("srs").value_name("SRS").help("Spatial reference of the points")),
        )
        .subcommand(
            ClapCommand::new("overlaps")
                .about("List input pairs sharing a common area")
                .arg(inputs_arg()),
        )
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_negative_pad_amounts_are_values() {
        let cases = [
            ("percent", "-5"),
            ("ratio", "-0.1,-0.2"),
            ("absolute", "-1,-2"),
        ];

        for (kind, amount) in cases {
            let flag = format!("--{}", kind);
            let matches = cli().try_get_matches_from(["extentkit", "pad", "in.toml", &flag, amount]).unwrap();
            let (_, sub) = matches.subcommand().unwrap();
            std::assert_eq!(sub.get_one::<String>(kind).map(String::as_str), Some(amount));
        }
    }

    #[test]
    fn test_negative_pad_percent_for_aggregations() {
        for name in ["intersect", "union"] {
            let matches = cli()
                .try_get_matches_from(["extentkit", name, "a.toml", "b.toml", "--pad-percent", "-5"])
                .unwrap();
            let (_, sub) = matches.subcommand().unwrap();
            std::assert_eq!(sub.get_one::<f64>("pad-percent"), Some(&-5.0));
            std::assert_eq!(sub.get_many::<String>("inputs").unwrap().count(), 2);
        }
    }

    #[test]
    fn test_pad_requires_one_amount() {
        std::assert!(cli().try_get_matches_from(["extentkit", "pad", "in.toml"]).is_err());
        std::assert!(cli()
            .try_get_matches_from(["extentkit", "pad", "in.toml", "--ratio", "1", "--percent", "2"])
            .is_err());
    }
}
