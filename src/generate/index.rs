//! In-memory contract bounds index
//!
//! Built once while contracts are generated, then shared read-only by the
//! dependent generators.

use crate::model::Contract;
use chrono::NaiveDate;
use rustc_hash::FxHashMap;

/// The parts of a contract its children are bounded by
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContractBounds {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub current_value: f64,
}

impl From<&Contract> for ContractBounds {
    fn from(contract: &Contract) -> Self {
        Self {
            start_date: contract.start_date,
            end_date: contract.end_date,
            current_value: contract.current_value,
        }
    }
}

/// Contract id → bounds
#[derive(Debug, Clone, Default)]
pub struct ContractIndex {
    bounds: FxHashMap<String, ContractBounds>,
}

impl ContractIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, contract: &Contract) {
        self.bounds
            .insert(contract.contract_id.clone(), ContractBounds::from(contract));
    }

    pub fn get(&self, contract_id: &str) -> Option<&ContractBounds> {
        self.bounds.get(contract_id)
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

impl<'a> FromIterator<&'a Contract> for ContractIndex {
    fn from_iter<I: IntoIterator<Item = &'a Contract>>(iter: I) -> Self {
        let mut index = ContractIndex::new();
        for contract in iter {
            index.insert(contract);
        }
        index
    }
}
