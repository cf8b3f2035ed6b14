//! Vendor generator

use crate::error::GenerateResult;
use crate::faker;
use crate::ids::IdPools;
use crate::model::{PastPerformance, PointOfContact, Vendor, VendorSize, SOCIOECONOMIC_FLAGS, VENDOR_CATEGORIES};
use crate::sampling::{choose, money, round_to, sample_distinct, uniform};
use crate::sink::RecordSink;
use rand::Rng;
use tracing::info;

fn to_owned_list(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

fn past_performance<R: Rng + ?Sized>(rng: &mut R) -> PastPerformance {
    PastPerformance {
        on_time_delivery_rate: round_to(uniform(0.7, 1.0, rng), 2),
        quality_rating: round_to(uniform(3.0, 5.0, rng), 1),
        cost_variance: round_to(uniform(-0.2, 0.3, rng), 2),
        contracts_completed: rng.gen_range(5..=200),
        avg_contract_value: money(100_000.0, 10_000_000.0, rng),
    }
}

/// Generate one vendor per id in the vendor pool
pub fn generate_vendors<R, S>(pools: &IdPools, rng: &mut R, sink: &mut S) -> GenerateResult<usize>
where
    R: Rng + ?Sized,
    S: RecordSink<Vendor> + ?Sized,
{
    info!("Generating {} vendors", pools.vendors.len());

    let mut written = 0;
    for vendor_id in &pools.vendors {
        let size = *choose(&VendorSize::ALL, rng);
        let categories = to_owned_list(sample_distinct(&VENDOR_CATEGORIES, 1, 5, rng));
        let annual_revenue = money(1_000_000.0, 5_000_000_000.0, rng);
        let past_performance = past_performance(rng);

        let name = faker::company(rng);
        let vendor = Vendor {
            vendor_id: vendor_id.clone(),
            duns_number: rng.gen_range(100_000_000..=999_999_999u32).to_string(),
            cage_code: rng.gen_range(10_000..=99_999u32).to_string(),
            address: faker::address(rng),
            city: faker::city(rng).to_string(),
            state: faker::state_abbr(rng).to_string(),
            zip_code: faker::zipcode(rng),
            phone: faker::phone_number(rng),
            email: faker::company_email(&name, rng),
            website: faker::url(&name, rng),
            name,
            size,
            categories,
            socioeconomic: to_owned_list(sample_distinct(&SOCIOECONOMIC_FLAGS, 0, 3, rng)),
            annual_revenue,
            year_established: rng.gen_range(1950..=2020),
            past_performance,
            active_contracts: rng.gen_range(1..=30),
            point_of_contact: PointOfContact {
                name: faker::name(rng),
                title: faker::job(rng).to_string(),
                phone: faker::phone_number(rng),
                email: faker::email(rng),
            },
        };
        sink.write_record(&vendor)?;
        written += 1;
    }
    sink.finish()?;

    info!("Generated {} vendors", written);
    Ok(written)
}
