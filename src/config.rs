//! Generator configuration
//!
//! Defaults reproduce the reference dataset sizes. A config can be loaded
//! from YAML and every field is optional there.

use crate::error::{GenerateError, GenerateResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output file names, relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputFiles {
    pub contracts: String,
    pub vendors: String,
    pub projects: String,
    pub transactions: String,
    pub modifications: String,
    pub deliverables: String,
    pub personnel: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            contracts: "contracts.csv".to_string(),
            vendors: "vendors.json".to_string(),
            projects: "projects.csv".to_string(),
            transactions: "transactions.csv".to_string(),
            modifications: "contract_modifications.csv".to_string(),
            deliverables: "deliverables.csv".to_string(),
            personnel: "personnel.csv".to_string(),
        }
    }
}

impl OutputFiles {
    /// First entity whose file name is blank
    fn empty_name(&self) -> Option<&'static str> {
        [
            ("contracts", &self.contracts),
            ("vendors", &self.vendors),
            ("projects", &self.projects),
            ("transactions", &self.transactions),
            ("modifications", &self.modifications),
            ("deliverables", &self.deliverables),
            ("personnel", &self.personnel),
        ]
        .into_iter()
        .find(|(_, name)| name.trim().is_empty())
        .map(|(entity, _)| entity)
    }
}

/// Dataset generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory all files are written into (created if missing)
    pub output_dir: PathBuf,
    /// File names inside `output_dir`
    pub files: OutputFiles,
    pub contracts: usize,
    pub vendors: usize,
    pub projects: usize,
    pub transactions: usize,
    pub modifications: usize,
    pub deliverables: usize,
    pub personnel: usize,
    /// Fixed seed for reproducible output (None = entropy)
    pub seed: Option<u64>,
    /// Anchor for personnel hire dates (None = today)
    pub reference_date: Option<NaiveDate>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data/raw"),
            files: OutputFiles::default(),
            contracts: 500,
            vendors: 200,
            projects: 50,
            transactions: 50_000,
            modifications: 2_000,
            deliverables: 5_000,
            personnel: 1_000,
            seed: None,
            reference_date: None,
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a YAML file; missing fields keep their defaults
    pub fn from_yaml_file(path: impl AsRef<Path>) -> GenerateResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> GenerateResult<Self> {
        let config: Self = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> GenerateResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configs where a generator would have to draw a foreign key
    /// from an empty pool.
    pub fn validate(&self) -> GenerateResult<()> {
        if self.contracts > 0 && self.vendors == 0 {
            return Err(GenerateError::InvalidConfig(
                "contracts need at least one vendor".to_string(),
            ));
        }
        if self.contracts > 0 && self.projects == 0 {
            return Err(GenerateError::InvalidConfig(
                "contracts need at least one project".to_string(),
            ));
        }
        let needs_personnel = self.contracts
            + self.projects
            + self.transactions
            + self.modifications
            + self.deliverables;
        if needs_personnel > 0 && self.personnel == 0 {
            return Err(GenerateError::InvalidConfig(
                "personnel pool must not be empty".to_string(),
            ));
        }
        if let Some(entity) = self.files.empty_name() {
            return Err(GenerateError::InvalidConfig(format!(
                "output file name for {} must not be empty",
                entity
            )));
        }
        Ok(())
    }

    pub fn path_for(&self, file: &str) -> PathBuf {
        self.output_dir.join(file)
    }
}
