//! Contract deliverable generator

use super::index::ContractIndex;
use super::{at_progress_step, EntityCount};
use crate::error::{GenerateError, GenerateResult};
use crate::faker;
use crate::ids::{IdKind, IdPools};
use crate::model::{Acceptance, Deliverable, DeliverableStatus, DeliverableType};
use crate::sampling::{choose, date_between, WeightedTable};
use crate::sink::RecordSink;
use chrono::Duration;
use rand::Rng;
use tracing::{debug, info};

const PROGRESS_EVERY: usize = 1_000;

/// Days between due and delivery: mostly on time, some late, few early
pub const DELIVERY_OFFSETS: [(i64, u32); 7] = [
    (-10, 5),
    (-5, 10),
    (0, 60),
    (3, 10),
    (7, 8),
    (15, 5),
    (30, 2),
];

/// Generate up to `count` deliverables, numbered `DEL-000001` onward.
///
/// Delivered, accepted and rejected items get a delivery date offset from
/// the due date. Only `Delivered` items carry an acceptance verdict; every
/// other status reports `N/A`.
pub fn generate_deliverables<R, S>(
    count: usize,
    pools: &IdPools,
    index: &ContractIndex,
    rng: &mut R,
    sink: &mut S,
) -> GenerateResult<EntityCount>
where
    R: Rng + ?Sized,
    S: RecordSink<Deliverable> + ?Sized,
{
    info!("Generating {} contract deliverables", count);

    let offsets = WeightedTable::new(&DELIVERY_OFFSETS)?;
    let verdicts = WeightedTable::new(&Acceptance::WEIGHTED)?;

    let mut result = EntityCount::requested(count);
    for i in 0..count {
        let deliverable_id = IdKind::Deliverable.format(i + 1);

        let resolved = pools
            .random_contract(rng)
            .and_then(|id| index.get(id).map(|bounds| (id, bounds)));
        if let Some((contract_id, bounds)) = resolved {
            let due_date = date_between(bounds.start_date, bounds.end_date, rng);
            let title = format!("Deliverable {}", faker::bs(rng));
            let deliverable_type = *choose(&DeliverableType::ALL, rng);
            let description = faker::paragraph(2, rng);
            let status = *choose(&DeliverableStatus::ALL, rng);

            let (delivery_date, accepted) = if status.is_delivered() {
                let delivered = due_date + Duration::days(offsets.sample(rng));
                let accepted = if status == DeliverableStatus::Delivered {
                    verdicts.sample(rng)
                } else {
                    Acceptance::NotApplicable
                };
                (Some(delivered), accepted)
            } else {
                (None, Acceptance::NotApplicable)
            };

            let deliverable = Deliverable {
                deliverable_id,
                contract_id: contract_id.to_string(),
                title,
                deliverable_type,
                due_date,
                delivery_date,
                status,
                description,
                accepted,
                reviewer: pools
                    .random_personnel(rng)
                    .ok_or_else(|| GenerateError::InvalidConfig("personnel pool is empty".to_string()))?
                    .to_string(),
            };
            sink.write_record(&deliverable)?;
            result.written += 1;
        } else {
            debug!("No contract resolved for {}, skipping", deliverable_id);
        }

        if at_progress_step(i + 1, PROGRESS_EVERY) {
            info!("Deliverable progress: {}/{}", i + 1, count);
        }
    }
    sink.finish()?;

    info!("Generated {} contract deliverables", result.written);
    Ok(result)
}
