//! Estimate command - Price a saved configuration.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use cyclo_cost::{Breakdown, Cost};
use cyclo_config::from_json;
use cyclo_pricing::SubnetPricer;

#[derive(Args)]
pub struct EstimateArgs {
    /// Path to a saved configuration JSON file
    #[arg(short, long)]
    config: PathBuf,

    /// Override the amortization horizon in days
    #[arg(long)]
    days: Option<u32>,

    /// Override the network-size selection
    #[arg(long)]
    subnet_index: Option<usize>,
}

pub fn execute(args: EstimateArgs) -> Result<()> {
    let json = fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read configuration from {:?}", args.config))?;
    let mut config = from_json(&json)?;

    if let Some(days) = args.days {
        config.days = days;
    }
    if let Some(subnet_index) = args.subnet_index {
        config.subnet_index = subnet_index;
    }

    info!(
        "Estimating {} features over {} days on a {}-node subnet",
        config.features.len(),
        config.days,
        config.subnet_size()
    );

    let pricer = SubnetPricer::new(config.subnet_size());
    let mut breakdown = config.breakdown(&pricer);
    breakdown.sort();

    println!(
        "Workload: {} features, {}-node subnet, {} day horizon",
        config.features.len(),
        config.subnet_size(),
        config.days
    );
    println!();
    print_breakdown(&breakdown);

    let total = breakdown.total();
    let days = f64::from(config.days);
    println!();
    print_row("Total (one-time)", &total.one_time);
    print_row("Total (per day)", &total.per_day);

    let projected = total.one_time.project(days) + total.per_day.project(days);
    println!();
    println!(
        "Projected over {} days: {:.4} USD / {:.0} cycles",
        config.days, projected.usd, projected.cycles
    );

    Ok(())
}

fn print_breakdown(breakdown: &Breakdown) {
    for item in breakdown.items() {
        let label = format!("{} ({})", item.category().label(), kind_label(item));
        print_row(&label, item);
    }
}

fn print_row(label: &str, cost: &Cost) {
    println!(
        "  {:<28} {:>14.4} USD {:>22.0} cycles",
        label,
        cost.amount().usd,
        cost.amount().cycles
    );
}

fn kind_label(cost: &Cost) -> &'static str {
    match cost.kind() {
        cyclo_cost::Kind::OneTime => "one-time",
        cyclo_cost::Kind::PerDay => "per day",
    }
}
