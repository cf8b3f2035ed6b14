//! Entity generators
//!
//! Contracts, vendors, projects and personnel are generated one per pool id.
//! Transactions, modifications and deliverables are drawn against random
//! contracts and resolved through a [`ContractIndex`]; a draw that cannot be
//! resolved produces no record.

pub mod contracts;
pub mod deliverables;
pub mod index;
pub mod modifications;
pub mod personnel;
pub mod projects;
pub mod transactions;
pub mod vendors;

pub use contracts::generate_contracts;
pub use deliverables::generate_deliverables;
pub use index::{ContractBounds, ContractIndex};
pub use modifications::generate_modifications;
pub use personnel::generate_personnel;
pub use projects::generate_projects;
pub use transactions::generate_transactions;
pub use vendors::generate_vendors;

use serde::{Deserialize, Serialize};

/// Requested vs written record counts of a dependent generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCount {
    pub requested: usize,
    pub written: usize,
}

impl EntityCount {
    pub fn requested(requested: usize) -> Self {
        Self { requested, written: 0 }
    }

    /// Fully written count, for generators that never skip
    pub fn complete(count: usize) -> Self {
        Self { requested: count, written: count }
    }

    pub fn skipped(&self) -> usize {
        self.requested.saturating_sub(self.written)
    }
}

/// True once `done` records complete a step of `every`, counting the final
/// record of a run.
pub(crate) fn at_progress_step(done: usize, every: usize) -> bool {
    every > 0 && done > 0 && done % every == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_steps_include_last_record() {
        assert!(at_progress_step(5_000, 1_000));
        assert!(at_progress_step(1_000, 1_000));
        assert!(!at_progress_step(4_999, 1_000));
        assert!(!at_progress_step(0, 1_000));
    }

    #[test]
    fn test_entity_count_skips() {
        let mut count = EntityCount::requested(10);
        count.written = 7;
        assert_eq!(count.skipped(), 3);
        assert_eq!(EntityCount::complete(4).skipped(), 0);
    }
}
