use crate::services::{ConfigPreset, Normalization};
use crate::strategies::StrategyKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dispatch_bench")]
#[command(about = "Compare the per-call cost of polymorphic dispatch strategies")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Time every selected strategy over a synthetic instrument dataset
    Run(RunArgs),

    /// Check that every strategy prices the dataset identically
    Verify {
        /// Number of records to generate
        #[arg(short = 'n', long, default_value = "1000")]
        sample_size: usize,

        /// Strategies to check (repeatable, default: all)
        #[arg(short, long = "strategy", value_enum)]
        strategies: Vec<StrategyKind>,
    },

    /// List available dispatch strategies
    List,
}

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Strategies to benchmark (repeatable, default: all)
    #[arg(short, long = "strategy", value_enum)]
    pub strategies: Vec<StrategyKind>,

    /// Number of sweeps over the dataset
    #[arg(short, long)]
    pub iterations: Option<u64>,

    /// Number of records to generate
    #[arg(short = 'n', long)]
    pub sample_size: Option<usize>,

    /// How the average is normalized
    #[arg(long, value_enum)]
    pub normalization: Option<Normalization>,

    /// Configuration preset (default, quick, thorough)
    #[arg(short, long, value_enum)]
    pub preset: Option<ConfigPreset>,

    /// JSON configuration file (takes precedence over --preset)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a JSON report to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the price verification pass before timing
    #[arg(long)]
    pub no_verify: bool,

    /// Suppress per-strategy output and the summary
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_defaults() {
        let cli = Cli::try_parse_from(["dispatch_bench", "run"]).unwrap();

        match cli.command {
            Commands::Run(args) => {
                assert!(args.strategies.is_empty());
                assert!(args.iterations.is_none());
                assert!(args.preset.is_none());
                assert!(!args.no_verify);
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_parse_run_overrides() {
        let cli = Cli::try_parse_from([
            "dispatch_bench",
            "run",
            "-s",
            "open",
            "--strategy",
            "fat-interface",
            "-i",
            "50",
            "-n",
            "200",
            "--normalization",
            "per-sweep",
            "--preset",
            "quick",
            "-o",
            "report.json",
            "--quiet",
        ])
        .unwrap();

        match cli.command {
            Commands::Run(args) => {
                assert_eq!(
                    args.strategies,
                    vec![StrategyKind::Open, StrategyKind::FatInterface]
                );
                assert_eq!(args.iterations, Some(50));
                assert_eq!(args.sample_size, Some(200));
                assert_eq!(args.normalization, Some(Normalization::PerSweep));
                assert_eq!(args.preset, Some(ConfigPreset::Quick));
                assert_eq!(args.output, Some(PathBuf::from("report.json")));
                assert!(args.quiet);
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_parse_unknown_strategy() {
        let result = Cli::try_parse_from(["dispatch_bench", "run", "-s", "virtual"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_verify_and_list() {
        let cli = Cli::try_parse_from(["dispatch_bench", "verify"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Verify { sample_size: 1000, .. }
        ));

        let cli = Cli::try_parse_from(["dispatch_bench", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
    }
}
