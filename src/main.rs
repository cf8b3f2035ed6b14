use anyhow::Context;
use cfa_synth::{DatasetGenerator, GeneratorConfig};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("CFA Synth v{}", cfa_synth::version());
    println!("==========================================");
    println!();

    let config = GeneratorConfig::default();
    let output_dir = config.output_dir.clone();
    let summary = DatasetGenerator::new(config)
        .run()
        .with_context(|| format!("generating dataset into {}", output_dir.display()))?;

    println!("\nData generation complete!");
    print!("{}", summary);

    println!("\nTips for scaling the dataset:");
    println!("1. Use cfa-synth-cli generate with --contracts, --transactions, etc.");
    println!("2. Pass --seed to make a run reproducible");
    Ok(())
}
