//! Identifier allocation
//!
//! Every primary key in the dataset is a prefixed, zero-padded sequence
//! number. Pools are allocated up front so foreign keys can be drawn before
//! the referenced entity is generated.

use rand::Rng;
use std::fmt;

/// Identifier family with its prefix and pad width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Contract,
    Vendor,
    Project,
    Personnel,
    Modification,
    Deliverable,
}

impl IdKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            IdKind::Contract => "CTR",
            IdKind::Vendor => "VEN",
            IdKind::Project => "PRJ",
            IdKind::Personnel => "PER",
            IdKind::Modification => "MOD",
            IdKind::Deliverable => "DEL",
        }
    }

    pub fn width(&self) -> usize {
        match self {
            IdKind::Vendor | IdKind::Project => 4,
            IdKind::Personnel => 5,
            IdKind::Contract | IdKind::Modification | IdKind::Deliverable => 6,
        }
    }

    /// Format the 1-based sequence number `n`
    pub fn format(&self, n: usize) -> String {
        format!("{}-{:0width$}", self.prefix(), n, width = self.width())
    }

    /// Ids `1..=count` in order
    pub fn sequence(&self, count: usize) -> Vec<String> {
        (1..=count).map(|n| self.format(n)).collect()
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Pre-generated primary key pools shared by all generators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdPools {
    pub contracts: Vec<String>,
    pub vendors: Vec<String>,
    pub projects: Vec<String>,
    pub personnel: Vec<String>,
}

impl IdPools {
    pub fn new(contracts: usize, vendors: usize, projects: usize, personnel: usize) -> Self {
        Self {
            contracts: IdKind::Contract.sequence(contracts),
            vendors: IdKind::Vendor.sequence(vendors),
            projects: IdKind::Project.sequence(projects),
            personnel: IdKind::Personnel.sequence(personnel),
        }
    }

    pub fn random_contract<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        pick(&self.contracts, rng)
    }

    pub fn random_vendor<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        pick(&self.vendors, rng)
    }

    pub fn random_project<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        pick(&self.projects, rng)
    }

    pub fn random_personnel<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        pick(&self.personnel, rng)
    }

    /// A personnel id other than `own_index`, or None when the pool has no
    /// one else in it.
    pub fn random_supervisor<R: Rng + ?Sized>(&self, own_index: usize, rng: &mut R) -> Option<&str> {
        let len = self.personnel.len();
        if len < 2 {
            return None;
        }
        // Draw from len-1 slots and shift past our own position
        let mut idx = rng.gen_range(0..len - 1);
        if idx >= own_index {
            idx += 1;
        }
        self.personnel.get(idx).map(String::as_str)
    }
}

fn pick<'a, R: Rng + ?Sized>(pool: &'a [String], rng: &mut R) -> Option<&'a str> {
    if pool.is_empty() {
        None
    } else {
        Some(pool[rng.gen_range(0..pool.len())].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_id_formats() {
        assert_eq!(IdKind::Contract.format(1), "CTR-000001");
        assert_eq!(IdKind::Vendor.format(42), "VEN-0042");
        assert_eq!(IdKind::Project.format(7), "PRJ-0007");
        assert_eq!(IdKind::Personnel.format(1000), "PER-01000");
        assert_eq!(IdKind::Modification.format(12), "MOD-000012");
        assert_eq!(IdKind::Deliverable.format(999_999), "DEL-999999");
    }

    #[test]
    fn test_pools_are_sequential() {
        let pools = IdPools::new(3, 2, 1, 4);
        assert_eq!(pools.contracts, vec!["CTR-000001", "CTR-000002", "CTR-000003"]);
        assert_eq!(pools.vendors, vec!["VEN-0001", "VEN-0002"]);
        assert_eq!(pools.projects, vec!["PRJ-0001"]);
        assert_eq!(pools.personnel.len(), 4);
        assert_eq!(pools.personnel[3], "PER-00004");
    }

    #[test]
    fn test_empty_pool_yields_none() {
        let pools = IdPools::new(0, 0, 0, 0);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pools.random_contract(&mut rng).is_none());
        assert!(pools.random_personnel(&mut rng).is_none());
    }

    #[test]
    fn test_supervisor_never_self() {
        let pools = IdPools::new(0, 0, 0, 5);
        let mut rng = StdRng::seed_from_u64(9);
        for own in 0..5 {
            for _ in 0..200 {
                let sup = pools.random_supervisor(own, &mut rng).unwrap();
                assert_ne!(sup, pools.personnel[own]);
            }
        }
    }

    #[test]
    fn test_supervisor_needs_two_people() {
        let pools = IdPools::new(0, 0, 0, 1);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(pools.random_supervisor(0, &mut rng).is_none());
    }
}
