//! Project generator

use crate::error::{GenerateError, GenerateResult};
use crate::faker;
use crate::ids::IdPools;
use crate::model::{Department, Priority, Project, ProjectType};
use crate::sampling::{add_years_of_days, choose, date_in_year, money};
use crate::sink::RecordSink;
use rand::Rng;
use tracing::info;

/// Generate one project per id in the project pool. Programs run 2 to 7
/// years and budgets reach into the hundreds of millions.
pub fn generate_projects<R, S>(pools: &IdPools, rng: &mut R, sink: &mut S) -> GenerateResult<usize>
where
    R: Rng + ?Sized,
    S: RecordSink<Project> + ?Sized,
{
    info!("Generating {} projects", pools.projects.len());

    let mut written = 0;
    for project_id in &pools.projects {
        let name = format!("Project {}", faker::catch_phrase(rng));
        let project_type = *choose(&ProjectType::ALL, rng);
        let description = faker::paragraph(3, rng);

        let start_date = date_in_year(rng.gen_range(2015..=2022), rng);
        let end_date = add_years_of_days(start_date, rng.gen_range(2..=7));

        let project = Project {
            project_id: project_id.clone(),
            name,
            project_type,
            description,
            start_date,
            end_date,
            total_budget: money(5_000_000.0, 500_000_000.0, rng),
            department: *choose(&Department::ALL, rng),
            program_manager: pools
                .random_personnel(rng)
                .ok_or_else(|| GenerateError::InvalidConfig("personnel pool is empty".to_string()))?
                .to_string(),
            priority: *choose(&Priority::ALL, rng),
        };
        sink.write_record(&project)?;
        written += 1;
    }
    sink.finish()?;

    info!("Generated {} projects", written);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_project_ranges() {
        let pools = IdPools::new(0, 0, 50, 10);
        let mut rng = StdRng::seed_from_u64(21);
        let mut rows = Vec::new();
        assert_eq!(generate_projects(&pools, &mut rng, &mut rows).unwrap(), 50);

        for p in &rows {
            assert!(p.name.starts_with("Project "));
            assert!((2015..=2022).contains(&p.start_date.year()));
            let years = (p.end_date - p.start_date).num_days() / 365;
            assert!((2..=7).contains(&years));
            assert!((5_000_000.0..=500_000_000.0).contains(&p.total_budget));
            assert!(pools.personnel.contains(&p.program_manager));
        }
    }
}
