//! Contract generator

use super::index::ContractIndex;
use crate::error::{GenerateError, GenerateResult};
use crate::faker;
use crate::ids::IdPools;
use crate::model::{Contract, ContractStatus, ContractType, Department};
use crate::sampling::{add_years_of_days, choose, date_in_year, money, round_to, WeightedTable};
use crate::sink::RecordSink;
use rand::Rng;
use tracing::info;

/// Start years, skewed toward recent awards
const START_YEARS: [(i32, u32); 7] = [
    (2018, 1),
    (2019, 2),
    (2020, 3),
    (2021, 5),
    (2022, 7),
    (2023, 10),
    (2024, 15),
];

/// Term length in years, skewed toward short contracts
const DURATION_YEARS: [(u32, u32); 5] = [(1, 40), (2, 30), (3, 15), (4, 10), (5, 5)];

/// Current/original value ratio: mostly on target, some under- and overruns
const VALUE_MODIFIERS: [(f64, u32); 6] = [
    (0.8, 5),
    (0.9, 15),
    (1.0, 50),
    (1.1, 20),
    (1.2, 8),
    (1.5, 2),
];

pub const MIN_ORIGINAL_VALUE: f64 = 100_000.0;
pub const MAX_ORIGINAL_VALUE: f64 = 50_000_000.0;

/// Generate one contract per id in the contract pool.
///
/// Returns the bounds index the dependent generators resolve against.
pub fn generate_contracts<R, S>(pools: &IdPools, rng: &mut R, sink: &mut S) -> GenerateResult<ContractIndex>
where
    R: Rng + ?Sized,
    S: RecordSink<Contract> + ?Sized,
{
    info!("Generating {} contracts", pools.contracts.len());

    let start_years = WeightedTable::new(&START_YEARS)?;
    let durations = WeightedTable::new(&DURATION_YEARS)?;
    let modifiers = WeightedTable::new(&VALUE_MODIFIERS)?;
    let statuses = WeightedTable::new(&ContractStatus::WEIGHTED)?;

    let mut index = ContractIndex::new();
    for contract_id in &pools.contracts {
        let contract_number = format!(
            "N00{}-{}-D-{}",
            rng.gen_range(10_000..=99_999),
            rng.gen_range(10..=99),
            rng.gen_range(1_000..=9_999)
        );
        let vendor_id = pools
            .random_vendor(rng)
            .ok_or_else(|| GenerateError::InvalidConfig("vendor pool is empty".to_string()))?
            .to_string();
        let project_id = pools
            .random_project(rng)
            .ok_or_else(|| GenerateError::InvalidConfig("project pool is empty".to_string()))?
            .to_string();
        let contract_type = *choose(&ContractType::ALL, rng);

        let start_date = date_in_year(start_years.sample(rng), rng);
        let end_date = add_years_of_days(start_date, durations.sample(rng));

        let original_value = money(MIN_ORIGINAL_VALUE, MAX_ORIGINAL_VALUE, rng);
        let current_value = round_to(original_value * modifiers.sample(rng), 2);

        let status = statuses.sample(rng);
        let department = *choose(&Department::ALL, rng);
        let description = faker::bs(rng);
        let contracting_officer = pools
            .random_personnel(rng)
            .ok_or_else(|| GenerateError::InvalidConfig("personnel pool is empty".to_string()))?
            .to_string();

        let contract = Contract {
            contract_id: contract_id.clone(),
            contract_number,
            vendor_id,
            project_id,
            contract_type,
            start_date,
            end_date,
            original_value,
            current_value,
            status,
            department,
            description,
            contracting_officer,
        };
        sink.write_record(&contract)?;
        index.insert(&contract);
    }
    sink.finish()?;

    info!("Generated {} contracts", index.len());
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate(pools: &IdPools, seed: u64) -> (Vec<Contract>, ContractIndex) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut rows = Vec::new();
        let index = generate_contracts(pools, &mut rng, &mut rows).unwrap();
        (rows, index)
    }

    #[test]
    fn test_one_contract_per_id() {
        let pools = IdPools::new(25, 4, 3, 10);
        let (rows, index) = generate(&pools, 1);
        assert_eq!(rows.len(), 25);
        assert_eq!(index.len(), 25);
        let ids: Vec<_> = rows.iter().map(|c| c.contract_id.clone()).collect();
        assert_eq!(ids, pools.contracts);
    }

    #[test]
    fn test_contract_invariants() {
        let pools = IdPools::new(300, 7, 5, 20);
        let (rows, index) = generate(&pools, 2);
        for c in &rows {
            assert!(c.end_date > c.start_date, "{} ends before it starts", c.contract_id);
            assert!(c.current_value >= 0.0);
            assert!((MIN_ORIGINAL_VALUE..=MAX_ORIGINAL_VALUE).contains(&c.original_value));
            let ratio = c.current_value / c.original_value;
            assert!(
                VALUE_MODIFIERS.iter().any(|(m, _)| (ratio - m).abs() < 1e-6),
                "unexpected modifier {}",
                ratio
            );
            let year = chrono::Datelike::year(&c.start_date);
            assert!((2018..=2024).contains(&year));
            let days = (c.end_date - c.start_date).num_days();
            assert_eq!(days % 365, 0);
            assert!((1..=5).contains(&(days / 365)));
            assert!(pools.vendors.contains(&c.vendor_id));
            assert!(pools.projects.contains(&c.project_id));
            assert!(pools.personnel.contains(&c.contracting_officer));
            assert!(c.contract_number.starts_with("N00"));
            assert_eq!(index.get(&c.contract_id).unwrap().current_value, c.current_value);
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let pools = IdPools::new(10, 2, 2, 5);
        let (a, _) = generate(&pools, 99);
        let (b, _) = generate(&pools, 99);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_vendor_pool_is_an_error() {
        let pools = IdPools::new(1, 0, 1, 1);
        let mut rng = StdRng::seed_from_u64(3);
        let mut rows: Vec<Contract> = Vec::new();
        let result = generate_contracts(&pools, &mut rng, &mut rows);
        assert!(matches!(result, Err(GenerateError::InvalidConfig(_))));
    }
}
