//! CLI command definitions.
//!
//! Each subcommand maps to one operation over a workload configuration.

use clap::{Parser, Subcommand};

pub mod estimate;
pub mod features;
pub mod preset;

/// cyclo - cost estimator for canister workloads
#[derive(Parser)]
#[command(name = "cyclo")]
#[command(version, about = "cyclo - cost estimator for canister workloads")]
#[command(long_about = r#"
cyclo estimates what a hypothetical canister workload costs, in USD and in
cycles, split into one-time and per-day charges.

WORKFLOWS:
  features  → List the catalog of billable features and their parameters
  preset    → Generate a ready-made workload configuration as JSON
  estimate  → Price a saved configuration over an amortization horizon

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Configuration load failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the catalog of billable features
    Features(features::FeaturesArgs),

    /// Generate a preset workload configuration
    Preset(preset::PresetArgs),

    /// Price a saved configuration
    Estimate(estimate::EstimateArgs),
}
