//! Personnel generator

use crate::error::GenerateResult;
use crate::faker;
use crate::ids::IdPools;
use crate::model::{Department, Personnel, PersonnelRole, SecurityClearance};
use crate::sampling::{choose, date_between};
use crate::sink::RecordSink;
use chrono::{Months, NaiveDate};
use rand::Rng;
use tracing::info;

/// Share of staff reporting to a supervisor
pub const SUPERVISED_SHARE: f64 = 0.8;

/// Hire dates reach back this many years from the reference date
pub const HIRE_WINDOW_YEARS: u32 = 20;

/// Generate one person per id in the personnel pool, hired within the 20
/// years before `reference_date`.
pub fn generate_personnel<R, S>(
    pools: &IdPools,
    reference_date: NaiveDate,
    rng: &mut R,
    sink: &mut S,
) -> GenerateResult<usize>
where
    R: Rng + ?Sized,
    S: RecordSink<Personnel> + ?Sized,
{
    info!("Generating {} personnel records", pools.personnel.len());

    let earliest_hire = reference_date
        .checked_sub_months(Months::new(12 * HIRE_WINDOW_YEARS))
        .unwrap_or(reference_date);

    let mut written = 0;
    for (own_index, personnel_id) in pools.personnel.iter().enumerate() {
        let supervisor = if rng.gen_bool(SUPERVISED_SHARE) {
            pools.random_supervisor(own_index, rng).map(str::to_string)
        } else {
            None
        };

        let person = Personnel {
            personnel_id: personnel_id.clone(),
            name: faker::name(rng),
            role: *choose(&PersonnelRole::ALL, rng),
            department: *choose(&Department::ALL, rng),
            email: faker::email(rng),
            phone: faker::phone_number(rng),
            security_clearance: *choose(&SecurityClearance::ALL, rng),
            hire_date: date_between(earliest_hire, reference_date, rng),
            supervisor,
        };
        sink.write_record(&person)?;
        written += 1;
    }
    sink.finish()?;

    info!("Generated {} personnel records", written);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_personnel_invariants() {
        let pools = IdPools::new(0, 0, 0, 1_000);
        let reference = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let mut rng = StdRng::seed_from_u64(61);
        let mut rows = Vec::new();
        assert_eq!(generate_personnel(&pools, reference, &mut rng, &mut rows).unwrap(), 1_000);

        let earliest = NaiveDate::from_ymd_opt(2005, 6, 30).unwrap();
        let mut supervised = 0;
        for p in &rows {
            if let Some(sup) = &p.supervisor {
                assert_ne!(sup, &p.personnel_id);
                assert!(pools.personnel.contains(sup));
                supervised += 1;
            }
            assert!(p.hire_date >= earliest && p.hire_date <= reference);
        }
        let share = supervised as f64 / rows.len() as f64;
        assert!((share - SUPERVISED_SHARE).abs() < 0.05, "supervised share was {}", share);
    }

    #[test]
    fn test_single_person_has_no_supervisor() {
        let pools = IdPools::new(0, 0, 0, 1);
        let reference = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let mut rng = StdRng::seed_from_u64(62);
        let mut rows = Vec::new();
        generate_personnel(&pools, reference, &mut rng, &mut rows).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].supervisor.is_none());
    }
}
