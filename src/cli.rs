use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::{core::search::SearchSettings, quantity::temperature::Fahrenheit};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: estimate the balance point and heat loss rate of a home.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Show how billing periods ending on the dates would be classified.
    #[clap(name = "classify")]
    Classify(ClassifyArgs),
}

#[derive(Parser)]
pub struct EstimateArgs {
    /// Input document, JSON or TOML.
    #[clap(long = "input", env = "INPUT_PATH")]
    pub input: PathBuf,

    #[clap(long = "format", value_enum, default_value = "table", env = "OUTPUT_FORMAT")]
    pub format: OutputFormat,

    /// Balance point to start the search from.
    #[clap(long = "initial-balance-point", default_value = "60", env = "INITIAL_BALANCE_POINT")]
    pub initial_balance_point: Fahrenheit,

    #[clap(flatten)]
    pub search: SearchSettings,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Billing period end dates, for example: `2024-01-31`.
    #[clap(required = true)]
    pub dates: Vec<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_estimate_defaults() {
        let args = Args::try_parse_from(["heat-balance", "estimate", "--input", "home.json"])
            .unwrap();
        let Command::Estimate(args) = args.command else {
            panic!("expected the estimate command");
        };
        assert_eq!(args.format, OutputFormat::Table);
        assert_abs_diff_eq!(args.initial_balance_point.0, 60.0);
        assert_abs_diff_eq!(args.search.initial_step.0, 2.0);
        assert_abs_diff_eq!(args.search.next_step.0, 0.5);
        assert_abs_diff_eq!(args.search.max_stdev_pct, 0.10);
        assert_abs_diff_eq!(args.search.min_stdev_pct_improvement, 0.01);
    }

    #[test]
    fn test_estimate_overrides() {
        let args = Args::try_parse_from([
            "heat-balance",
            "estimate",
            "--input",
            "home.toml",
            "--format",
            "json",
            "--initial-balance-point",
            "58.5",
            "--max-stdev-pct",
            "0.2",
        ])
        .unwrap();
        let Command::Estimate(args) = args.command else {
            panic!("expected the estimate command");
        };
        assert_eq!(args.format, OutputFormat::Json);
        assert_abs_diff_eq!(args.initial_balance_point.0, 58.5);
        assert_abs_diff_eq!(args.search.max_stdev_pct, 0.2);
    }

    #[test]
    fn test_classify() {
        let args =
            Args::try_parse_from(["heat-balance", "classify", "2024-01-31", "2024-07-31"]).unwrap();
        let Command::Classify(args) = args.command else {
            panic!("expected the classify command");
        };
        assert_eq!(args.dates.len(), 2);
    }
}
