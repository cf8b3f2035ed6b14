//! Sampling primitives
//!
//! A reusable weighted table plus the uniform helpers every generator shares.

use crate::error::GenerateResult;
use chrono::{Duration, NaiveDate};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

/// Discrete distribution over fixed values with relative weights
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    values: Vec<T>,
    index: WeightedIndex<u32>,
}

impl<T: Clone> WeightedTable<T> {
    /// Build a table from `(value, weight)` pairs. Fails if the weights are
    /// empty or all zero.
    pub fn new(entries: &[(T, u32)]) -> GenerateResult<Self> {
        let index = WeightedIndex::new(entries.iter().map(|(_, w)| *w))?;
        let values = entries.iter().map(|(v, _)| v.clone()).collect();
        Ok(Self { values, index })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.values[self.index.sample(rng)].clone()
    }
}

/// Uniform pick from a non-empty constant table
pub fn choose<'a, T, R: Rng + ?Sized>(values: &'a [T], rng: &mut R) -> &'a T {
    &values[rng.gen_range(0..values.len())]
}

/// `k` distinct values, `k` uniform in `min..=max` (capped at the table size)
pub fn sample_distinct<T: Clone, R: Rng + ?Sized>(
    values: &[T],
    min: usize,
    max: usize,
    rng: &mut R,
) -> Vec<T> {
    let k = rng.gen_range(min..=max).min(values.len());
    values.choose_multiple(rng, k).cloned().collect()
}

/// Uniform float in `[low, high]`
pub fn uniform<R: Rng + ?Sized>(low: f64, high: f64, rng: &mut R) -> f64 {
    if high <= low {
        return low;
    }
    rng.gen_range(low..=high)
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Money amount in `[low, high]` rounded to cents, never outside the bounds
pub fn money<R: Rng + ?Sized>(low: f64, high: f64, rng: &mut R) -> f64 {
    let floor = (high * 100.0).floor() / 100.0;
    let amount = round_to(uniform(low, high, rng), 2);
    amount.clamp(low, floor.max(low)).min(high.max(low))
}

/// Uniform date in `[start, end]` (inclusive on both ends)
pub fn date_between<R: Rng + ?Sized>(start: NaiveDate, end: NaiveDate, rng: &mut R) -> NaiveDate {
    let span = (end - start).num_days();
    if span <= 0 {
        return start;
    }
    start + Duration::days(rng.gen_range(0..=span))
}

/// Uniform date within calendar year `year`
pub fn date_in_year<R: Rng + ?Sized>(year: i32, rng: &mut R) -> NaiveDate {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN);
    let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(start);
    date_between(start, end, rng)
}

/// Contract-style term: `years` × 365 days after `start`
pub fn add_years_of_days(start: NaiveDate, years: u32) -> NaiveDate {
    start + Duration::days(365 * i64::from(years))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_weighted_table_respects_zero_weight() {
        let table = WeightedTable::new(&[("never", 0), ("always", 5)]).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            assert_eq!(table.sample(&mut rng), "always");
        }
    }

    #[test]
    fn test_weighted_table_rejects_all_zero() {
        assert!(WeightedTable::new(&[("a", 0), ("b", 0)]).is_err());
        assert!(WeightedTable::<&str>::new(&[]).is_err());
    }

    #[test]
    fn test_weighted_table_proportions() {
        let table = WeightedTable::new(&[(0u8, 60), (1, 25), (2, 5), (3, 5), (4, 5)]).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut counts = [0usize; 5];
        for _ in 0..20_000 {
            counts[table.sample(&mut rng) as usize] += 1;
        }
        let share = counts[0] as f64 / 20_000.0;
        assert!((share - 0.60).abs() < 0.03, "share of first value was {}", share);
    }

    #[test]
    fn test_sample_distinct_bounds() {
        let values = ["a", "b", "c", "d", "e", "f"];
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let picked = sample_distinct(&values, 0, 3, &mut rng);
            assert!(picked.len() <= 3);
            let mut dedup = picked.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), picked.len());
        }
    }

    #[test]
    fn test_money_within_bounds() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..1000 {
            let m = money(1000.0, 8000.005, &mut rng);
            assert!((1000.0..=8000.0).contains(&m));
            assert_eq!(round_to(m, 2), m);
        }
    }

    #[test]
    fn test_date_between_inclusive() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..200 {
            let d = date_between(start, end, &mut rng);
            assert!(d >= start && d <= end);
        }
        assert_eq!(date_between(end, start, &mut rng), end);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.005_1, 2), 1.01);
        assert_eq!(round_to(3.14159, 1), 3.1);
        assert_eq!(round_to(-0.126, 2), -0.13);
    }
}
