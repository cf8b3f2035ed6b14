//! Contract modification generator

use super::index::ContractIndex;
use super::{at_progress_step, EntityCount};
use crate::error::{GenerateError, GenerateResult};
use crate::faker;
use crate::ids::{IdKind, IdPools};
use crate::model::{Modification, ModificationStatus, ModificationType};
use crate::sampling::{choose, date_between, round_to, uniform};
use crate::sink::RecordSink;
use rand::Rng;
use tracing::{debug, info};

const PROGRESS_EVERY: usize = 500;

/// Value changes range from a 20% cut to a 30% increase of the contract
const VALUE_CHANGE_RANGE: (f64, f64) = (-0.2, 0.3);

/// Schedule changes range from 30 days earlier to 180 days later
const DAYS_CHANGE_RANGE: (i32, i32) = (-30, 180);

/// Generate up to `count` modifications, numbered `MOD-000001` onward.
///
/// A number is consumed even when its draw is skipped, so ids can have gaps.
pub fn generate_modifications<R, S>(
    count: usize,
    pools: &IdPools,
    index: &ContractIndex,
    rng: &mut R,
    sink: &mut S,
) -> GenerateResult<EntityCount>
where
    R: Rng + ?Sized,
    S: RecordSink<Modification> + ?Sized,
{
    info!("Generating {} contract modifications", count);

    let mut result = EntityCount::requested(count);
    for i in 0..count {
        let modification_id = IdKind::Modification.format(i + 1);
        let mod_number = format!("P{}{}", rng.gen_range(0..=9), rng.gen_range(10..=99));

        let resolved = pools
            .random_contract(rng)
            .and_then(|id| index.get(id).map(|bounds| (id, bounds)));
        if let Some((contract_id, bounds)) = resolved {
            let mod_date = date_between(bounds.start_date, bounds.end_date, rng);
            let modification_type = *choose(&ModificationType::ALL, rng);
            let description = faker::paragraph(1, rng);

            let value_change = if modification_type.changes_value() {
                let (low, high) = VALUE_CHANGE_RANGE;
                round_to(uniform(low * bounds.current_value, high * bounds.current_value, rng), 2)
            } else {
                0.0
            };
            let days_change = if modification_type.changes_schedule() {
                rng.gen_range(DAYS_CHANGE_RANGE.0..=DAYS_CHANGE_RANGE.1)
            } else {
                0
            };

            let modification = Modification {
                modification_id,
                contract_id: contract_id.to_string(),
                mod_number,
                mod_date,
                modification_type,
                description,
                value_change,
                days_change,
                approved_by: pools
                    .random_personnel(rng)
                    .ok_or_else(|| GenerateError::InvalidConfig("personnel pool is empty".to_string()))?
                    .to_string(),
                status: *choose(&ModificationStatus::ALL, rng),
            };
            sink.write_record(&modification)?;
            result.written += 1;
        } else {
            debug!("No contract resolved for {}, skipping", modification_id);
        }

        if at_progress_step(i + 1, PROGRESS_EVERY) {
            info!("Modification progress: {}/{}", i + 1, count);
        }
    }
    sink.finish()?;

    info!("Generated {} contract modifications", result.written);
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

    #[test]
    fn test_modification_rules() {
        let pools = IdPools::new(30, 3, 3, 15);
        let mut rng = StdRng::seed_from_u64(41);
        let mut contracts: Vec<Contract> = Vec::new();
        let index = generate_contracts(&pools, &mut rng, &mut contracts).unwrap();
        let by_id: HashMap<_, _> = contracts.iter().map(|c| (c.contract_id.as_str(), c)).collect();

        let mut rows = Vec::new();
        let count = generate_modifications(1_000, &pools, &index, &mut rng, &mut rows).unwrap();
        assert_eq!(count.written, 1_000);
        assert_eq!(rows[0].modification_id, "MOD-000001");
        assert_eq!(rows[999].modification_id, "MOD-001000");

        for m in &rows {
            let c = by_id[m.contract_id.as_str()];
            assert!(m.mod_date >= c.start_date && m.mod_date <= c.end_date);
            if m.modification_type.changes_value() {
                assert!(m.value_change >= -0.2 * c.current_value - 0.01);
                assert!(m.value_change <= 0.3 * c.current_value + 0.01);
            } else {
                assert_eq!(m.value_change, 0.0);
            }
            if m.modification_type.changes_schedule() {
                assert!((-30..=180).contains(&m.days_change));
            } else {
                assert_eq!(m.days_change, 0);
            }
            assert!(m.mod_number.starts_with('P'));
            assert_eq!(m.mod_number.len(), 4);
        }
    }

    #[test]
    fn test_skipped_draws_leave_id_gaps() {
        let pools = IdPools::new(4, 1, 1, 2);
        let mut rng = StdRng::seed_from_u64(42);
        let mut contracts: Vec<Contract> = Vec::new();
        generate_contracts(&pools, &mut rng, &mut contracts).unwrap();
        let index: ContractIndex = contracts.iter().take(1).collect();

        let mut rows = Vec::new();
        let count = generate_modifications(200, &pools, &index, &mut rng, &mut rows).unwrap();
        assert_eq!(count.written, rows.len());
        assert!(count.skipped() > 0);
        assert!(rows.iter().all(|m| m.contract_id == "CTR-000001"));
        let ids: Vec<String> = rows.iter().map(|m| m.modification_id.clone()).collect();
        assert_ne!(ids, IdKind::Modification.sequence(rows.len()));
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
