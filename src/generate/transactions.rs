//! Financial transaction generator

use super::index::ContractIndex;
use super::EntityCount;
use crate::error::{GenerateError, GenerateResult};
use crate::faker;
use crate::fiscal::FiscalPeriod;
use crate::ids::IdPools;
use crate::model::{Transaction, TransactionType};
use crate::sampling::{choose, date_between, money};
use crate::sink::RecordSink;
use rand::Rng;
use tracing::{debug, info};
use uuid::Builder;

/// Records per progress report
pub const CHUNK_SIZE: usize = 10_000;

pub const MIN_AMOUNT: f64 = 1_000.0;

/// Largest share of a contract's current value a single transaction may bill
pub const MAX_SHARE_OF_CONTRACT: f64 = 0.1;

/// Generate `count` transactions against random contracts.
///
/// Each transaction is dated inside its contract's term and bills between
/// [`MIN_AMOUNT`] and a tenth of the contract's current value. Draws whose
/// contract is missing from `index` are dropped without a row.
pub fn generate_transactions<R, S>(
    count: usize,
    pools: &IdPools,
    index: &ContractIndex,
    rng: &mut R,
    sink: &mut S,
) -> GenerateResult<EntityCount>
where
    R: Rng + ?Sized,
    S: RecordSink<Transaction> + ?Sized,
{
    info!("Generating {} transactions", count);

    let mut result = EntityCount::requested(count);
    let mut attempted = 0;
    while attempted < count {
        let chunk = CHUNK_SIZE.min(count - attempted);
        for _ in 0..chunk {
            let resolved = pools
                .random_contract(rng)
                .and_then(|id| index.get(id).map(|bounds| (id, bounds)));
            let Some((contract_id, bounds)) = resolved else {
                debug!("No contract resolved, skipping transaction");
                continue;
            };

            let transaction_date = date_between(bounds.start_date, bounds.end_date, rng);
            let max_amount = bounds.current_value * MAX_SHARE_OF_CONTRACT;
            let amount = money(MIN_AMOUNT, max_amount, rng);
            let period = FiscalPeriod::from_date(transaction_date);

            let transaction = Transaction {
                transaction_id: Builder::from_random_bytes(rng.gen()).into_uuid().to_string(),
                contract_id: contract_id.to_string(),
                transaction_date,
                amount,
                transaction_type: *choose(&TransactionType::ALL, rng),
                description: faker::sentence(rng),
                fiscal_year: period.year,
                fiscal_quarter: period.quarter,
                invoice_number: format!("INV-{}", rng.gen_range(10_000..=99_999)),
                approved_by: pools
                    .random_personnel(rng)
                    .ok_or_else(|| GenerateError::InvalidConfig("personnel pool is empty".to_string()))?
                    .to_string(),
            };
            sink.write_record(&transaction)?;
            result.written += 1;
        }
        attempted += chunk;
        info!("Transaction progress: {}/{}", attempted, count);
    }
    sink.finish()?;

    info!("Generated {} transactions", result.written);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::contracts::generate_contracts;
    use crate::model::Contract;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;
    use uuid::{Uuid, Version};

    #[test]
    fn test_transactions_stay_inside_contracts() {
        let pools = IdPools::new(40, 5, 5, 30);
        let mut rng = StdRng::seed_from_u64(31);
        let mut contracts: Vec<Contract> = Vec::new();
        let index = generate_contracts(&pools, &mut rng, &mut contracts).unwrap();
        let by_id: HashMap<_, _> = contracts.iter().map(|c| (c.contract_id.as_str(), c)).collect();

        let mut rows = Vec::new();
        let count = generate_transactions(2_000, &pools, &index, &mut rng, &mut rows).unwrap();
        assert_eq!(count.requested, 2_000);
        assert_eq!(count.written, 2_000);
        assert_eq!(rows.len(), 2_000);

        for t in &rows {
            let c = by_id[t.contract_id.as_str()];
            assert!(t.transaction_date >= c.start_date && t.transaction_date <= c.end_date);
            assert!(t.amount >= MIN_AMOUNT);
            assert!(t.amount <= c.current_value * MAX_SHARE_OF_CONTRACT);
            let period = FiscalPeriod::from_date(t.transaction_date);
            assert_eq!((t.fiscal_year, t.fiscal_quarter), (period.year, period.quarter));
            assert!(t.invoice_number.starts_with("INV-"));
            assert!(pools.personnel.contains(&t.approved_by));
            let uuid = Uuid::parse_str(&t.transaction_id).unwrap();
            assert_eq!(uuid.get_version(), Some(Version::Random));
        }
    }

    #[test]
    fn test_unresolved_contracts_are_skipped() {
        let pools = IdPools::new(10, 2, 2, 5);
        let mut rng = StdRng::seed_from_u64(32);
        let mut contracts: Vec<Contract> = Vec::new();
        generate_contracts(&pools, &mut rng, &mut contracts).unwrap();

        // Only the first half of the contracts can be resolved
        let index: ContractIndex = contracts.iter().take(5).collect();
        let mut rows = Vec::new();
        let count = generate_transactions(500, &pools, &index, &mut rng, &mut rows).unwrap();

        assert!(count.written < 500);
        assert_eq!(count.skipped(), 500 - rows.len());
        assert!(rows.iter().all(|t| index.get(&t.contract_id).is_some()));
    }

    #[test]
    fn test_no_contracts_no_transactions() {
        let pools = IdPools::new(0, 1, 1, 1);
        let mut rng = StdRng::seed_from_u64(33);
        let mut rows = Vec::new();
        let count =
            generate_transactions(50, &pools, &ContractIndex::new(), &mut rng, &mut rows).unwrap();
        assert_eq!(count.written, 0);
        assert_eq!(count.skipped(), 50);
        assert!(rows.is_empty());
    }
}
