use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "sbridge",
    about = "Si–O connectivity and bridging-oxygen rings for silica bilayers",
    version,
    author,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    /// XYZ coordinate file of the slab
    #[arg(value_name = "XYZ")]
    pub coordinates: PathBuf,

    /// Si–O bond cutoff in Å (Å² with --squared)
    #[arg(value_name = "DIST", allow_negative_numbers = true)]
    pub distance: f64,

    /// Ring list, one ring of atom indices per line
    #[arg(value_name = "RINGS")]
    pub rings: PathBuf,

    #[command(flatten)]
    pub detect: DetectOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output and summary tables (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Bond detection options.
#[derive(Args)]
#[command(next_help_heading = "Bond Detection")]
pub struct DetectOptions {
    /// Treat DIST as an already-squared cutoff (Å²)
    #[arg(long)]
    pub squared: bool,

    /// Neighbor search strategy
    #[arg(long, value_name = "STRATEGY", default_value = "exhaustive")]
    pub search: SearchStrategy,

    /// Boundary correction list (TOML file with [[corrections]] si/o entries)
    #[arg(long, value_name = "FILE")]
    pub corrections: Option<PathBuf>,
}

/// Output locations.
#[derive(Args)]
#[command(next_help_heading = "Output")]
pub struct OutputOptions {
    /// Directory for the <basename>.con bond table (default: current directory)
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Bridge list output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub bridges: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SearchStrategy {
    /// Test every Si against every O
    Exhaustive,
    /// Bucket oxygens into a cutoff-sized grid
    Grid,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_three_positionals() {
        let cli = Cli::try_parse_from(["sbridge", "slab.xyz", "1.6", "rings.dat"]).unwrap();
        assert_eq!(cli.coordinates, PathBuf::from("slab.xyz"));
        assert_eq!(cli.distance, 1.6);
        assert_eq!(cli.rings, PathBuf::from("rings.dat"));
        assert!(!cli.detect.squared);
        assert!(matches!(cli.detect.search, SearchStrategy::Exhaustive));
    }

    #[test]
    fn missing_positional_is_rejected() {
        assert!(Cli::try_parse_from(["sbridge", "slab.xyz", "1.6"]).is_err());
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(Cli::try_parse_from(["sbridge", "a.xyz", "1.6", "r.dat", "extra"]).is_err());
    }

    #[test]
    fn parses_detection_flags() {
        let cli = Cli::try_parse_from([
            "sbridge",
            "slab.xyz",
            "1.25",
            "rings.dat",
            "--squared",
            "--search",
            "grid",
            "--corrections",
            "fix.toml",
            "-vv",
        ])
        .unwrap();
        assert!(cli.detect.squared);
        assert!(matches!(cli.detect.search, SearchStrategy::Grid));
        assert_eq!(cli.detect.corrections, Some(PathBuf::from("fix.toml")));
        assert_eq!(cli.verbose, 2);
    }
}
