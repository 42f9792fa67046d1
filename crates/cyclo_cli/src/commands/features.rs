//! Features command - List the catalog.

use anyhow::Result;
use clap::Args;

use cyclo_features::{registry, FieldKind};

#[derive(Args)]
pub struct FeaturesArgs {
    /// Also print each feature's description
    #[arg(long)]
    info: bool,
}

pub fn execute(args: FeaturesArgs) -> Result<()> {
    for entry in registry::catalog() {
        let feature = entry.build();
        println!("{}", entry.label());

        if args.info {
            println!("   {}", feature.info());
        }

        for field in feature.fields() {
            match &field.kind {
                FieldKind::Increment => {
                    println!("   - {} (counter, default {})", field.label, field.value);
                }
                FieldKind::Range { choices } => {
                    println!(
                        "   - {} (choices: {}; default {})",
                        field.label,
                        choices.join(", "),
                        choices[field.value as usize],
                    );
                }
            }
        }
        println!();
    }

    Ok(())
}
