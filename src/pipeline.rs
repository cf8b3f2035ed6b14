//! Dataset pipeline
//!
//! Runs the generators in dependency order and writes one file per entity:
//! contracts, vendors, projects, transactions, modifications, deliverables,
//! personnel. A failure stops the run and leaves already written files in
//! place.

use crate::config::GeneratorConfig;
use crate::error::GenerateResult;
use crate::generate::{
    generate_contracts, generate_deliverables, generate_modifications, generate_personnel,
    generate_projects, generate_transactions, generate_vendors, EntityCount,
};
use crate::ids::IdPools;
use crate::model::{Contract, CsvRecord, Deliverable, Modification, Personnel, Project, Transaction};
use crate::sink::{CsvSink, JsonArraySink};
use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Counts produced by one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
    pub contracts: EntityCount,
    pub vendors: EntityCount,
    pub projects: EntityCount,
    pub transactions: EntityCount,
    pub modifications: EntityCount,
    pub deliverables: EntityCount,
    pub personnel: EntityCount,
}

impl GenerationSummary {
    /// `(label, count)` rows in generation order
    pub fn rows(&self) -> Vec<(&'static str, EntityCount)> {
        vec![
            ("contracts", self.contracts),
            ("vendors", self.vendors),
            ("projects", self.projects),
            ("financial transactions", self.transactions),
            ("contract modifications", self.modifications),
            ("deliverables", self.deliverables),
            ("personnel records", self.personnel),
        ]
    }

    pub fn total_written(&self) -> usize {
        self.rows().iter().map(|(_, c)| c.written).sum()
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Files are in {}", self.output_dir.display())?;
        writeln!(f, "Summary:")?;
        for (label, count) in self.rows() {
            if count.skipped() > 0 {
                writeln!(f, "- {} {} ({} skipped)", count.written, label, count.skipped())?;
            } else {
                writeln!(f, "- {} {}", count.written, label)?;
            }
        }
        Ok(())
    }
}

/// Generates the full dataset described by a [`GeneratorConfig`]
pub struct DatasetGenerator {
    config: GeneratorConfig,
}

impl DatasetGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run with a random source seeded from the config, or from entropy
    pub fn run(&self) -> GenerateResult<GenerationSummary> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(&mut rng)
    }

    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> GenerateResult<GenerationSummary> {
        let config = &self.config;
        config.validate()?;

        info!("Starting defense contract financial data generation");
        std::fs::create_dir_all(&config.output_dir)?;

        let pools = IdPools::new(config.contracts, config.vendors, config.projects, config.personnel);
        let reference_date: NaiveDate = config
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive());
        let files = &config.files;

        let mut sink = CsvSink::create(config.path_for(&files.contracts), Contract::HEADERS)?;
        let index = generate_contracts(&pools, rng, &mut sink)?;
        let contracts = EntityCount::complete(index.len());

        let mut sink = JsonArraySink::create(config.path_for(&files.vendors))?;
        let vendors = EntityCount::complete(generate_vendors(&pools, rng, &mut sink)?);

        let mut sink = CsvSink::create(config.path_for(&files.projects), Project::HEADERS)?;
        let projects = EntityCount::complete(generate_projects(&pools, rng, &mut sink)?);

        let mut sink = CsvSink::create(config.path_for(&files.transactions), Transaction::HEADERS)?;
        let transactions = generate_transactions(config.transactions, &pools, &index, rng, &mut sink)?;

        let mut sink = CsvSink::create(config.path_for(&files.modifications), Modification::HEADERS)?;
        let modifications =
            generate_modifications(config.modifications, &pools, &index, rng, &mut sink)?;

        let mut sink = CsvSink::create(config.path_for(&files.deliverables), Deliverable::HEADERS)?;
        let deliverables =
            generate_deliverables(config.deliverables, &pools, &index, rng, &mut sink)?;

        let mut sink = CsvSink::create(config.path_for(&files.personnel), Personnel::HEADERS)?;
        let personnel =
            EntityCount::complete(generate_personnel(&pools, reference_date, rng, &mut sink)?);

        let summary = GenerationSummary {
            output_dir: config.output_dir.clone(),
            seed: config.seed,
            contracts,
            vendors,
            projects,
            transactions,
            modifications,
            deliverables,
            personnel,
        };
        info!("Data generation complete: {} records", summary.total_written());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use tempfile::TempDir;

    fn small_config(dir: &TempDir) -> GeneratorConfig {
        GeneratorConfig {
            output_dir: dir.path().join("raw"),
            contracts: 5,
            vendors: 2,
            projects: 2,
            transactions: 30,
            modifications: 10,
            deliverables: 10,
            personnel: 8,
            seed: Some(1),
            reference_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_run_creates_every_file() {
        let dir = TempDir::new().unwrap();
        let config = small_config(&dir);
        let summary = DatasetGenerator::new(config.clone()).run().unwrap();

        for file in [
            &config.files.contracts,
            &config.files.vendors,
            &config.files.projects,
            &config.files.transactions,
            &config.files.modifications,
            &config.files.deliverables,
            &config.files.personnel,
        ] {
            assert!(config.path_for(file).exists(), "{} missing", file);
        }
        assert_eq!(summary.contracts.written, 5);
        assert_eq!(summary.transactions.written, 30);
        assert_eq!(summary.personnel.written, 8);
        assert!(summary.to_string().contains("- 5 contracts"));
    }

    #[test]
    fn test_same_seed_same_files() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        let config_a = small_config(&a);
        let config_b = small_config(&b);
        DatasetGenerator::new(config_a.clone()).run().unwrap();
        DatasetGenerator::new(config_b.clone()).run().unwrap();

        for (fa, fb) in [
            (config_a.path_for("contracts.csv"), config_b.path_for("contracts.csv")),
            (config_a.path_for("transactions.csv"), config_b.path_for("transactions.csv")),
            (config_a.path_for("vendors.json"), config_b.path_for("vendors.json")),
        ] {
            assert_eq!(std::fs::read(fa).unwrap(), std::fs::read(fb).unwrap());
        }
    }

    #[test]
    fn test_invalid_config_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut config = small_config(&dir);
        config.personnel = 0;
        let result = DatasetGenerator::new(config.clone()).run();
        assert!(matches!(result, Err(GenerateError::InvalidConfig(_))));
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn test_empty_entities_still_get_header_rows() {
        let dir = TempDir::new().unwrap();
        let config = GeneratorConfig {
            contracts: 0,
            vendors: 2,
            projects: 1,
            transactions: 5,
            modifications: 3,
            deliverables: 0,
            personnel: 3,
            ..small_config(&dir)
        };
        let summary = DatasetGenerator::new(config.clone()).run().unwrap();
        assert_eq!(summary.transactions.written, 0);
        assert_eq!(summary.transactions.skipped(), 5);

        for (file, headers) in [
            (&config.files.contracts, Contract::HEADERS),
            (&config.files.transactions, Transaction::HEADERS),
            (&config.files.modifications, Modification::HEADERS),
            (&config.files.deliverables, Deliverable::HEADERS),
        ] {
            let text = std::fs::read_to_string(config.path_for(file)).unwrap();
            assert_eq!(text, format!("{}\n", headers.join(",")), "{} has no header row", file);
        }
    }
}
