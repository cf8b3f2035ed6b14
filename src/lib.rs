//! CFA Synth
//!
//! Synthetic defense-contract financial dataset generator. Produces a
//! relational fixture set for analytics and testing: contracts, vendors,
//! projects, transactions, contract modifications, deliverables and
//! personnel, with every foreign key drawn from pre-allocated id pools.
//!
//! # Guarantees
//!
//! - Every foreign key references an id from its pool
//! - Transaction, modification and deliverable dates fall inside the parent
//!   contract's term
//! - Transactions bill between $1,000 and 10% of the contract's current value
//! - Fiscal year and quarter follow the October 1 federal calendar
//! - No one supervises themselves
//!
//! Randomness is unseeded by default; set [`GeneratorConfig::seed`] to make
//! a run reproducible.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cfa_synth::{DatasetGenerator, GeneratorConfig};
//!
//! let config = GeneratorConfig::default()
//!     .with_output_dir("data/raw")
//!     .with_seed(42);
//!
//! let summary = DatasetGenerator::new(config).run()?;
//! println!("{}", summary);
//! # Ok::<(), cfa_synth::GenerateError>(())
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod faker;
pub mod fiscal;
pub mod generate;
pub mod ids;
pub mod model;
pub mod pipeline;
pub mod sampling;
pub mod sink;

// Re-export main types for convenience
pub use config::{GeneratorConfig, OutputFiles};
pub use error::{GenerateError, GenerateResult};
pub use fiscal::FiscalPeriod;
pub use generate::{ContractBounds, ContractIndex, EntityCount};
pub use ids::{IdKind, IdPools};
pub use model::{
    Contract, CsvRecord, Deliverable, Modification, PastPerformance, Personnel, PointOfContact,
    Project, Transaction, Vendor,
};
pub use pipeline::{DatasetGenerator, GenerationSummary};
pub use sampling::WeightedTable;
pub use sink::{CsvSink, JsonArraySink, RecordSink};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
