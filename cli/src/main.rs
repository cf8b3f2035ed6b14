//! CFA Synth CLI: command-line interface for the dataset generator

use anyhow::Context;
use cfa_synth::{DatasetGenerator, FiscalPeriod, GenerationSummary, GeneratorConfig};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cfa-synth", version, about = "Synthetic defense contract dataset generator")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full dataset
    Generate {
        /// YAML config file; flags below override its values
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory the files are written into
        #[arg(long, env = "CFA_OUTPUT_DIR")]
        output_dir: Option<PathBuf>,

        #[arg(long)]
        contracts: Option<usize>,
        #[arg(long)]
        vendors: Option<usize>,
        #[arg(long)]
        projects: Option<usize>,
        #[arg(long)]
        transactions: Option<usize>,
        #[arg(long)]
        modifications: Option<usize>,
        #[arg(long)]
        deliverables: Option<usize>,
        #[arg(long)]
        personnel: Option<usize>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Anchor date for personnel hire dates (YYYY-MM-DD)
        #[arg(long)]
        reference_date: Option<NaiveDate>,
    },
    /// Show the fiscal year and quarter of a date
    Fiscal {
        /// Calendar date (YYYY-MM-DD)
        date: NaiveDate,
    },
    /// Print the default configuration as YAML
    Config,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            config,
            output_dir,
            contracts,
            vendors,
            projects,
            transactions,
            modifications,
            deliverables,
            personnel,
            seed,
            reference_date,
        } => load_config(config.as_ref()).and_then(|mut cfg| {
            if let Some(dir) = output_dir {
                cfg.output_dir = dir;
            }
            override_count(&mut cfg.contracts, contracts);
            override_count(&mut cfg.vendors, vendors);
            override_count(&mut cfg.projects, projects);
            override_count(&mut cfg.transactions, transactions);
            override_count(&mut cfg.modifications, modifications);
            override_count(&mut cfg.deliverables, deliverables);
            override_count(&mut cfg.personnel, personnel);
            if seed.is_some() {
                cfg.seed = seed;
            }
            if reference_date.is_some() {
                cfg.reference_date = reference_date;
            }
            run_generate(cfg, &cli.format)
        }),
        Commands::Fiscal { date } => run_fiscal(date, &cli.format),
        Commands::Config => run_config(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(GeneratorConfig::default()),
    }
}

fn override_count(target: &mut usize, value: Option<usize>) {
    if let Some(v) = value {
        *target = v;
    }
}

fn run_generate(config: GeneratorConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let output_dir = config.output_dir.clone();
    let summary = DatasetGenerator::new(config)
        .run()
        .with_context(|| format!("generating dataset into {}", output_dir.display()))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Table => print_summary_table(&summary),
    }
    Ok(())
}

fn print_summary_table(summary: &GenerationSummary) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Entity", "Requested", "Written", "Skipped"]);
    for (label, count) in summary.rows() {
        table.add_row(vec![
            label.to_string(),
            count.requested.to_string(),
            count.written.to_string(),
            count.skipped().to_string(),
        ]);
    }
    println!("{}", table);
    println!("Files are in {}", summary.output_dir.display());
    if let Some(seed) = summary.seed {
        println!("Seed: {}", seed);
    }
}

fn run_fiscal(date: NaiveDate, format: &OutputFormat) -> anyhow::Result<()> {
    let period = FiscalPeriod::from_date(date);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&period)?),
        OutputFormat::Table => println!("{} → {}", date, period),
    }
    Ok(())
}

fn run_config() -> anyhow::Result<()> {
    print!("{}", GeneratorConfig::default().to_yaml()?);
    Ok(())
}
