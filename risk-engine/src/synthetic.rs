//! Labelled demo data for deployments without a real vitals dataset.
//!
//! Values are uniform draws inside fixed ranges and labels come purely from
//! the record's position, so the output carries no clinical signal. It keeps
//! the risk panel populated; it is not a model of any population.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::types::{RiskLevel, Vitals, VitalsRecord};

pub const DEFAULT_SYNTHETIC_COUNT: usize = 100;

/// Share of records labelled `Low`, in percent
pub const LOW_BAND_PERCENT: usize = 60;
/// Records before this percentage and past the low band are `Medium`
pub const MEDIUM_BAND_END_PERCENT: usize = 85;

pub const RESPIRATORY_RATE_RANGE: Range<f64> = 12.0..27.0;
pub const OXYGEN_SATURATION_RANGE: Range<f64> = 92.0..100.0;
pub const HEART_RATE_RANGE: Range<f64> = 60.0..100.0;
pub const SYSTOLIC_BP_RANGE: Range<f64> = 110.0..150.0;
pub const DIASTOLIC_BP_RANGE: Range<f64> = 70.0..95.0;
pub const OXYGEN_THERAPY_PROBABILITY: f64 = 0.2;

/// `floor(count * percent / 100)` without overflowing on large counts
fn band_cut(count: usize, percent: usize) -> usize {
    (count / 100) * percent + (count % 100) * percent / 100
}

/// Label for the record at `index` in a dataset of `count` records.
///
/// The first 60% are `Low`, up to 85% are `Medium`, the rest `High`.
pub fn label_for_index(index: usize, count: usize) -> RiskLevel {
    if index < band_cut(count, LOW_BAND_PERCENT) {
        RiskLevel::Low
    } else if index < band_cut(count, MEDIUM_BAND_END_PERCENT) {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Draw one vitals sample from the synthetic ranges
pub fn random_vitals<R: Rng + ?Sized>(rng: &mut R) -> Vitals {
    Vitals {
        respiratory_rate: rng.gen_range(RESPIRATORY_RATE_RANGE),
        oxygen_saturation: rng.gen_range(OXYGEN_SATURATION_RANGE),
        heart_rate: rng.gen_range(HEART_RATE_RANGE),
        systolic_bp: rng.gen_range(SYSTOLIC_BP_RANGE),
        diastolic_bp: rng.gen_range(DIASTOLIC_BP_RANGE),
        oxygen_therapy: rng.gen_bool(OXYGEN_THERAPY_PROBABILITY),
    }
}

pub fn generate_synthetic_dataset_with<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Vec<VitalsRecord> {
    let records: Vec<VitalsRecord> = (0..count)
        .map(|index| VitalsRecord::new(random_vitals(&mut *rng), label_for_index(index, count)))
        .collect();

    debug!(count = records.len(), "Generated synthetic vitals dataset");
    records
}

/// Generate `count` records from the thread-local RNG
pub fn generate_synthetic_dataset(count: usize) -> Vec<VitalsRecord> {
    generate_synthetic_dataset_with(count, &mut rand::thread_rng())
}

/// Reproducible variant: the same seed always yields the same records
pub fn generate_seeded_dataset(count: usize, seed: u64) -> Vec<VitalsRecord> {
    generate_synthetic_dataset_with(count, &mut StdRng::seed_from_u64(seed))
}
