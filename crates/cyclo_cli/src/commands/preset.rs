//! Preset command - Generate a ready-made workload configuration.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::info;

use cyclo_config::{to_json, Configuration};
use cyclo_features::presets;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PresetName {
    /// A static landing page
    LandingPage,
    /// A social network sized by daily active users
    SocialNetwork,
    /// A decentralized exchange sized by daily trades
    Dex,
    /// A data-heavy service sized by stored users
    LargeData,
}

#[derive(Args)]
pub struct PresetArgs {
    /// The preset workload to generate
    #[arg(value_enum)]
    name: PresetName,

    /// Active users (social-network and large-data presets)
    #[arg(long, default_value_t = 1000)]
    users: u64,

    /// Trades per day (dex preset)
    #[arg(long, default_value_t = 1000)]
    trades: u64,

    /// Write the configuration to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

pub fn execute(args: PresetArgs) -> Result<()> {
    let features = match args.name {
        PresetName::LandingPage => presets::landing_page(),
        PresetName::SocialNetwork => presets::social_network(args.users),
        PresetName::Dex => presets::decentralized_exchange(args.trades),
        PresetName::LargeData => presets::large_data(args.users),
    };

    let config = Configuration::with_features(features);
    let json = to_json(&config)?;

    match args.out {
        Some(path) => {
            fs::write(&path, &json)
                .with_context(|| format!("Failed to write configuration to {:?}", path))?;
            info!("Wrote configuration to {:?}", path);
            println!("✅ Wrote {} features to {}", config.features.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
