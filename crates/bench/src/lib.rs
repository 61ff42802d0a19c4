use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 300;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 600;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;
const FEW_UNIQUE_VALUES: i64 = 8;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input shapes used by the sorting benchmarks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pattern {
    Random,
    Ascending,
    Descending,
    FewUnique,
}

pub const ALL_PATTERNS: [Pattern; 4] = [
    Pattern::Random,
    Pattern::Ascending,
    Pattern::Descending,
    Pattern::FewUnique,
];

impl Pattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::FewUnique => "few_unique",
        }
    }

    /// Patterns that drive a last-element pivot into quadratic behavior.
    pub fn is_adversarial(self) -> bool {
        matches!(self, Self::Ascending | Self::Descending | Self::FewUnique)
    }
}

pub fn generate_pattern<R: Rng + ?Sized>(rng: &mut R, pattern: Pattern, size: usize) -> Vec<i64> {
    match pattern {
        Pattern::Random => (0..size).map(|_| rng.random::<i64>()).collect(),
        Pattern::Ascending => (0..size as i64).collect(),
        Pattern::Descending => (0..size as i64).rev().collect(),
        Pattern::FewUnique => (0..size)
            .map(|_| rng.random_range(0..FEW_UNIQUE_VALUES))
            .collect(),
    }
}
